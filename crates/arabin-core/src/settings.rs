//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`
//!
//! The rule table is not configurable; settings only cover what front ends
//! show and how they start.

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub messages: MessageSettings,
    #[serde(default)]
    pub display: DisplaySettings,
}

/// User-facing strings.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageSettings {
    pub empty_input: String,
    pub copied: String,
    pub nothing_to_copy: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisplaySettings {
    #[serde(default = "default_dark_mode")]
    pub dark_mode: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            dark_mode: default_dark_mode(),
        }
    }
}

fn default_dark_mode() -> bool {
    true
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_non_blank {
        ($section:ident . $field:ident) => {
            if s.$section.$field.trim().is_empty() {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
        };
    }

    check_non_blank!(messages.empty_input);
    check_non_blank!(messages.copied);
    check_non_blank!(messages.nothing_to_copy);

    Ok(())
}
