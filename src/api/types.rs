use arabin_core::engine::ExplainSegment;
use arabin_core::TransliterateError;
use arabin_session::{Event, Response, Theme};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum ArabinError {
    #[error("input is empty")]
    EmptyInput,
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
}

impl From<TransliterateError> for ArabinError {
    fn from(e: TransliterateError) -> Self {
        match e {
            TransliterateError::EmptyInput => ArabinError::EmptyInput,
        }
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// One consumed span of the input. `tier` is empty for pass-through text.
/// Offsets past `u32::MAX` saturate.
#[derive(Clone, Debug, uniffi::Record)]
pub struct ArabinSegment {
    pub start: u32,
    pub end: u32,
    pub source: String,
    pub output: String,
    pub tier: Option<String>,
}

impl From<ExplainSegment> for ArabinSegment {
    fn from(seg: ExplainSegment) -> Self {
        Self {
            start: u32::try_from(seg.start).unwrap_or(u32::MAX),
            end: u32::try_from(seg.end).unwrap_or(u32::MAX),
            source: seg.source,
            output: seg.output,
            tier: seg.tier.map(|t| t.name().to_string()),
        }
    }
}

/// Events returned from every session action, applied by the GUI in order.
#[derive(uniffi::Record)]
pub struct ArabinResponse {
    pub events: Vec<ArabinEvent>,
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum ArabinTheme {
    Dark,
    Light,
}

#[derive(Clone, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum ArabinEvent {
    SetOutput { text: String },
    ShowWarning { message: String },
    CopyToClipboard { text: String },
    ShowNotification { message: String },
    ClearInput,
    ClearOutput,
    FocusInput,
    ApplyTheme { theme: ArabinTheme },
}

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

impl From<Theme> for ArabinTheme {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Dark => ArabinTheme::Dark,
            Theme::Light => ArabinTheme::Light,
        }
    }
}

impl From<Event> for ArabinEvent {
    fn from(event: Event) -> Self {
        match event {
            Event::SetOutput { text } => ArabinEvent::SetOutput { text },
            Event::ShowWarning { message } => ArabinEvent::ShowWarning { message },
            Event::CopyToClipboard { text } => ArabinEvent::CopyToClipboard { text },
            Event::ShowNotification { message } => ArabinEvent::ShowNotification { message },
            Event::ClearInput => ArabinEvent::ClearInput,
            Event::ClearOutput => ArabinEvent::ClearOutput,
            Event::FocusInput => ArabinEvent::FocusInput,
            Event::ApplyTheme { theme } => ArabinEvent::ApplyTheme {
                theme: theme.into(),
            },
        }
    }
}

pub(super) fn convert_to_response(resp: Response) -> ArabinResponse {
    ArabinResponse {
        events: resp.events.into_iter().map(ArabinEvent::from).collect(),
    }
}
