//! Nomen CLI - language guessing for personal names.

mod output;

use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use nomen_core::{Languages, NameType};
use nomen_rule_engine::LanguageGuesser;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "nomen")]
#[command(about = "Guess the likely source languages of personal names", long_about = None)]
struct Cli {
    /// Names to guess
    ///
    /// When no names are given, reads them from stdin, one per line.
    #[arg(value_name = "NAMES")]
    names: Vec<String>,

    /// Name type to match against
    ///
    /// Selects the rule table and language vocabulary. Use gen for names
    /// of any origin, ash for Ashkenazi names, sep for Sephardic names.
    #[arg(short = 't', long = "name-type", value_name = "TYPE", default_value = "gen")]
    name_type: String,

    /// Load rules from a file instead of the built-in tables
    #[arg(long, value_name = "PATH")]
    rules: Option<PathBuf>,

    /// Output format
    #[arg(short, long = "output", value_enum, default_value = "human")]
    format: OutputFormat,

    /// Output JSON format (alias for --output json)
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Human,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_tracing(cli.verbose);

    let Some(name_type) = NameType::from_cli_name(&cli.name_type) else {
        let known = NameType::all()
            .iter()
            .map(|nt| format!("{} ({})", nt.cli_name(), nt.display_name()))
            .collect::<Vec<_>>()
            .join(", ");
        bail!(
            "unknown name type '{}', expected one of: {known}",
            cli.name_type
        );
    };

    let languages = Languages::for_name_type(name_type);
    let guesser = match &cli.rules {
        Some(path) => LanguageGuesser::load_from_path(path, languages)
            .with_context(|| format!("failed to load rules from {}", path.display()))?,
        None => LanguageGuesser::load_builtin(name_type, languages)
            .context("failed to load built-in rules")?,
    };
    debug!(
        name_type = name_type.cli_name(),
        rules = guesser.rule_count(),
        "guesser ready"
    );

    let names = if cli.names.is_empty() {
        read_names_from_stdin()?
    } else {
        cli.names.clone()
    };

    let guesses: Vec<output::Guess> = names
        .iter()
        .map(|name| output::Guess::new(name, &guesser))
        .collect();

    if cli.json || matches!(cli.format, OutputFormat::Json) {
        output::print_json(&guesses);
    } else {
        output::print_human(&guesses);
    }

    Ok(())
}

/// Read names from stdin, one per line, skipping blanks.
fn read_names_from_stdin() -> Result<Vec<String>> {
    let stdin = io::stdin();
    let mut names = Vec::new();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read names from stdin")?;
        let name = line.trim();
        if !name.is_empty() {
            names.push(name.to_string());
        }
    }
    Ok(names)
}

fn setup_tracing(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    // Results go to stdout; keep logging on stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
