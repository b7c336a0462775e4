//! UniFFI export layer for the GUI shell.
//!
//! Each public type here maps to a generated class, struct, or enum on the
//! other side of the FFI boundary.

mod session;
mod types;

pub use session::ArabinSession;
pub use types::{ArabinError, ArabinEvent, ArabinResponse, ArabinSegment, ArabinTheme};

use std::path::Path;

// ---------------------------------------------------------------------------
// Top-level functions
// ---------------------------------------------------------------------------

#[uniffi::export]
fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[uniffi::export]
fn transliterate(text: String) -> Result<String, ArabinError> {
    Ok(arabin_core::transliterate(&text)?)
}

#[uniffi::export]
fn explain(text: String) -> Result<Vec<ArabinSegment>, ArabinError> {
    let result = arabin_core::engine::explain(&text)?;
    Ok(result.segments.into_iter().map(ArabinSegment::from).collect())
}

#[uniffi::export]
fn settings_load_config(path: String) -> Result<(), ArabinError> {
    let content = read_config(&path)?;
    arabin_core::settings::init_custom(content)
        .map_err(|e| ArabinError::InvalidData { msg: e.to_string() })?;
    tracing::debug!(path = %path, "custom settings loaded");
    Ok(())
}

#[uniffi::export]
fn settings_default_config() -> String {
    arabin_core::settings::default_toml().to_string()
}

#[uniffi::export]
fn trace_init(log_dir: String) {
    crate::trace_init::init_tracing(Path::new(&log_dir));
}

fn read_config(path: &str) -> Result<String, ArabinError> {
    std::fs::read_to_string(path).map_err(|e| ArabinError::Io {
        msg: format!("{path}: {e}"),
    })
}
