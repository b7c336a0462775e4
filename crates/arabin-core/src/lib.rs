pub mod engine;
pub mod rules;
pub mod settings;
pub mod unicode;

pub use engine::{transliterate, TransliterateError, Transliterator};
