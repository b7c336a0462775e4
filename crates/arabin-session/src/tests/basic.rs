use super::*;
use crate::{Event, Theme};

#[test]
fn test_transliterate_sets_output() {
    let mut s = make_session();
    s.set_input("  --kitaabu ");
    let resp = s.transliterate();
    assert_eq!(
        resp.events,
        vec![Event::SetOutput {
            text: "الكِتَابُ".into()
        }]
    );
    assert_eq!(s.output(), "الكِتَابُ");
    assert_eq!(s.input(), "  --kitaabu ");
}

#[test]
fn test_empty_input_warns_and_keeps_output() {
    let mut s = make_session();
    s.set_input("ba");
    s.transliterate();
    s.set_input("   ");
    let resp = s.transliterate();
    assert_eq!(resp.warning(), Some("Teks input tidak boleh kosong."));
    assert_eq!(resp.events.len(), 1);
    assert_eq!(s.output(), "بَ");
}

#[test]
fn test_custom_messages() {
    let mut s = make_light_session();
    let resp = s.transliterate();
    assert_eq!(resp.warning(), Some("Input must not be empty."));
    assert_eq!(
        s.copy_output().events,
        vec![Event::ShowNotification {
            message: "Nothing to copy.".into()
        }]
    );
}

#[test]
fn test_copy_output() {
    let mut s = make_session();
    s.set_input("saw");
    s.transliterate();
    let resp = s.copy_output();
    assert_eq!(
        resp.events,
        vec![
            Event::CopyToClipboard {
                text: "ﷺ".into()
            },
            Event::ShowNotification {
                message: "Hasil transliterasi telah disalin.".into()
            },
        ]
    );
}

#[test]
fn test_copy_nothing() {
    let s = make_session();
    let resp = s.copy_output();
    assert_eq!(
        resp.events,
        vec![Event::ShowNotification {
            message: "Tidak ada teks untuk disalin.".into()
        }]
    );
}

#[test]
fn test_copy_semicolon_only_output_is_nothing() {
    // ";" is deleted, so the output is empty but not an error.
    let mut s = make_session();
    s.set_input(";");
    assert_eq!(
        s.transliterate().events,
        vec![Event::SetOutput { text: String::new() }]
    );
    assert!(s.copy_output().events.iter().all(|e| !matches!(e, Event::CopyToClipboard { .. })));
}

#[test]
fn test_reset() {
    let mut s = make_session();
    s.set_input("ba");
    s.transliterate();
    let resp = s.reset();
    assert_eq!(
        resp.events,
        vec![Event::ClearInput, Event::ClearOutput, Event::FocusInput]
    );
    assert_eq!(s.input(), "");
    assert_eq!(s.output(), "");
}

#[test]
fn test_toggle_theme() {
    let mut s = make_session();
    assert_eq!(s.theme(), Theme::Dark);
    let resp = s.toggle_theme();
    assert_eq!(
        resp.events,
        vec![Event::ApplyTheme {
            theme: Theme::Light
        }]
    );
    s.toggle_theme();
    assert!(s.theme().is_dark());
}

#[test]
fn test_light_start() {
    let s = make_light_session();
    assert_eq!(s.theme(), Theme::Light);
}
