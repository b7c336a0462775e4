use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use arabin_session::TransliterationSession;

use super::types::convert_to_response;
use super::ArabinResponse;

#[derive(uniffi::Object)]
pub struct ArabinSession {
    session: Mutex<TransliterationSession>,
}

impl ArabinSession {
    fn lock(&self) -> MutexGuard<'_, TransliterationSession> {
        // A panicked call leaves plain strings behind; keep serving them.
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[uniffi::export]
impl ArabinSession {
    #[uniffi::constructor]
    fn new() -> Arc<Self> {
        Arc::new(Self {
            session: Mutex::new(TransliterationSession::new()),
        })
    }

    fn set_input(&self, text: String) {
        self.lock().set_input(text);
    }

    fn input(&self) -> String {
        self.lock().input().to_string()
    }

    fn output(&self) -> String {
        self.lock().output().to_string()
    }

    fn transliterate(&self) -> ArabinResponse {
        convert_to_response(self.lock().transliterate())
    }

    fn copy_output(&self) -> ArabinResponse {
        convert_to_response(self.lock().copy_output())
    }

    fn reset(&self) -> ArabinResponse {
        convert_to_response(self.lock().reset())
    }

    fn toggle_theme(&self) -> ArabinResponse {
        convert_to_response(self.lock().toggle_theme())
    }

    fn is_dark_mode(&self) -> bool {
        self.lock().theme().is_dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ArabinEvent, ArabinTheme};

    #[test]
    fn empty_input_warns() {
        let s = ArabinSession::new();
        s.set_input("   ".to_string());
        let resp = s.transliterate();
        assert_eq!(resp.events.len(), 1);
        assert!(matches!(resp.events[0], ArabinEvent::ShowWarning { .. }));
        assert!(s.output().is_empty());
    }

    #[test]
    fn transliterate_then_copy() {
        let s = ArabinSession::new();
        s.set_input("ba".to_string());
        let resp = s.transliterate();
        let expected = arabin_core::transliterate("ba").unwrap();
        assert_eq!(
            resp.events,
            vec![ArabinEvent::SetOutput {
                text: expected.clone()
            }]
        );
        let resp = s.copy_output();
        assert_eq!(resp.events[0], ArabinEvent::CopyToClipboard { text: expected });
        assert!(matches!(resp.events[1], ArabinEvent::ShowNotification { .. }));
    }

    #[test]
    fn reset_clears_both_panes() {
        let s = ArabinSession::new();
        s.set_input("kitaab".to_string());
        s.transliterate();
        let resp = s.reset();
        assert_eq!(
            resp.events,
            vec![
                ArabinEvent::ClearInput,
                ArabinEvent::ClearOutput,
                ArabinEvent::FocusInput
            ]
        );
        assert!(s.input().is_empty());
        assert!(s.output().is_empty());
    }

    #[test]
    fn toggle_theme_flips() {
        let s = ArabinSession::new();
        let before = s.is_dark_mode();
        let resp = s.toggle_theme();
        assert_eq!(s.is_dark_mode(), !before);
        let expected = if before {
            ArabinTheme::Light
        } else {
            ArabinTheme::Dark
        };
        assert_eq!(resp.events, vec![ArabinEvent::ApplyTheme { theme: expected }]);
    }
}
