use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use arabin_cli::commands::{config_ops, convert_ops, rules_ops};

#[derive(Parser)]
#[command(name = "arabin", about = "Latin to Arabic script transliteration")]
struct Cli {
    /// Path to a custom settings TOML file
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Log engine spans to stderr (needs the `trace` feature; filter with RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate text from arguments, a file, or stdin (one line at a time)
    Convert {
        /// Text to transliterate; reads stdin when omitted
        text: Vec<String>,
        /// Read the whole input from this file
        #[arg(long, conflicts_with = "text")]
        file: Option<String>,
        /// Drop tashkil from the output
        #[arg(long)]
        bare: bool,
    },
    /// Show which rule consumed each part of the input
    Explain {
        text: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List the rule table
    Rules {
        /// Only this tier (idiom, punctuation, ta_marbuta, geminate, digraph, consonant, sukun, vowel)
        #[arg(long)]
        tier: Option<String>,
    },
    /// Validate the rule table and print per-tier counts
    Check,
    /// Export or validate settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Print the default settings TOML
    Export,
    /// Validate a settings TOML file
    Validate { file: String },
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("arabin_core=debug,arabin_cli=debug")),
        )
        .init();
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        init_logging();
    }
    if let Some(ref path) = cli.settings {
        config_ops::load_settings(path);
    }

    match cli.command {
        Command::Convert { text, file, bare } => {
            convert_ops::convert_cmd(&text, file.as_deref(), bare)
        }
        Command::Explain { text, json } => convert_ops::explain_cmd(&text, json),
        Command::Rules { tier } => rules_ops::rules_cmd(tier.as_deref()),
        Command::Check => rules_ops::check_cmd(),
        Command::Settings { action } => match action {
            SettingsAction::Export => config_ops::settings_export(),
            SettingsAction::Validate { file } => config_ops::settings_validate(&file),
        },
    }
}
