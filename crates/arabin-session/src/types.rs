/// Color scheme the front end should render with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// A single instruction for the front end, applied in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Replace the output pane and scroll it to the top.
    SetOutput { text: String },
    /// Modal warning; nothing else changed.
    ShowWarning { message: String },
    /// Put `text` on the system clipboard.
    CopyToClipboard { text: String },
    /// Transient notification dialog.
    ShowNotification { message: String },
    ClearInput,
    ClearOutput,
    FocusInput,
    ApplyTheme { theme: Theme },
}

/// Response from a session action, returned to the caller (the GUI via bindings).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Response {
    pub events: Vec<Event>,
}

impl Response {
    pub(crate) fn with(events: Vec<Event>) -> Self {
        Self { events }
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn warning(&self) -> Option<&str> {
        self.events.iter().find_map(|e| match e {
            Event::ShowWarning { message } => Some(message.as_str()),
            _ => None,
        })
    }
}
