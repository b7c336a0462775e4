//! Headless state of the transliteration front end.
//!
//! `TransliterationSession` owns the input and output text and the theme, and
//! answers each user action with a `Response` the GUI applies. Clipboard
//! access and rendering stay with the caller.

mod types;

#[cfg(test)]
mod tests;

use tracing::{debug, debug_span};

use arabin_core::settings::{settings, MessageSettings, Settings};
use arabin_core::{TransliterateError, Transliterator};

pub use types::{Event, Response, Theme};

pub struct TransliterationSession {
    engine: &'static Transliterator,
    messages: MessageSettings,
    input: String,
    output: String,
    theme: Theme,
}

impl Default for TransliterationSession {
    fn default() -> Self {
        Self::new()
    }
}

impl TransliterationSession {
    /// Session configured from the global settings.
    pub fn new() -> Self {
        Self::with_settings(settings())
    }

    pub fn with_settings(settings: &Settings) -> Self {
        Self {
            engine: Transliterator::global(),
            messages: settings.messages.clone(),
            input: String::new(),
            output: String::new(),
            theme: Theme::from_dark_mode(settings.display.dark_mode),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Mirror the input pane's content. Produces no events.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Convert the current input. Empty input leaves the output untouched.
    pub fn transliterate(&mut self) -> Response {
        let _span = debug_span!("session_transliterate", input_len = self.input.len()).entered();
        match self.engine.transliterate(&self.input) {
            Ok(text) => {
                self.output.clone_from(&text);
                Response::with(vec![Event::SetOutput { text }])
            }
            Err(TransliterateError::EmptyInput) => {
                debug!("empty input, warning shown");
                Response::with(vec![Event::ShowWarning {
                    message: self.messages.empty_input.clone(),
                }])
            }
        }
    }

    /// Hand the output to the clipboard, or report that there is nothing to copy.
    pub fn copy_output(&self) -> Response {
        if self.output.is_empty() {
            return Response::with(vec![Event::ShowNotification {
                message: self.messages.nothing_to_copy.clone(),
            }]);
        }
        Response::with(vec![
            Event::CopyToClipboard {
                text: self.output.clone(),
            },
            Event::ShowNotification {
                message: self.messages.copied.clone(),
            },
        ])
    }

    pub fn reset(&mut self) -> Response {
        self.input.clear();
        self.output.clear();
        Response::with(vec![Event::ClearInput, Event::ClearOutput, Event::FocusInput])
    }

    pub fn toggle_theme(&mut self) -> Response {
        self.theme = self.theme.toggled();
        Response::with(vec![Event::ApplyTheme { theme: self.theme }])
    }
}
