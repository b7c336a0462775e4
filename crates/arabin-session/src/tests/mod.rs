use arabin_core::settings::{parse_settings_toml, DEFAULT_SETTINGS_TOML};

use crate::TransliterationSession;

mod basic;

pub(super) fn make_session() -> TransliterationSession {
    let settings = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
    TransliterationSession::with_settings(&settings)
}

pub(super) fn make_light_session() -> TransliterationSession {
    let settings = parse_settings_toml(
        r#"
[messages]
empty_input = "Input must not be empty."
copied = "Copied."
nothing_to_copy = "Nothing to copy."

[display]
dark_mode = false
"#,
    )
    .unwrap();
    TransliterationSession::with_settings(&settings)
}
