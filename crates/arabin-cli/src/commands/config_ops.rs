use std::fs;
use std::path::Path;

use arabin_core::settings;
use tracing::debug;

use super::CliError;

fn read(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Install a custom settings file before anything reads the settings.
pub fn load_settings(file: &str) {
    let content = die!(read(Path::new(file)), "Error reading settings: {}");
    die!(settings::init_custom(content), "Error in {file}: {}");
    debug!(file, "custom settings installed");
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(read(Path::new(file)), "Error reading settings: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: display.dark_mode={}, messages.empty_input={:?}",
        s.display.dark_mode, s.messages.empty_input
    );
}
