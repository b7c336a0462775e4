//! Binding layer for the Arabin transliteration engine.
//!
//! The GUI shell links this crate (static or dynamic) and talks to it through
//! the generated UniFFI bindings in `api`.

uniffi::setup_scaffolding!();

pub mod api;
mod trace_init;

pub use arabin_core::{transliterate, TransliterateError, Transliterator};
