use std::path::PathBuf;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub mod config_ops;
pub mod convert_ops;
pub mod rules_ops;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("unknown tier '{0}' (available: idiom, punctuation, ta_marbuta, geminate, digraph, consonant, sukun, vowel)")]
    UnknownTier(String),
}
