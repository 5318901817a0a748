//! Command-line interface for vocabulary sheet conversion.
//!
//! Reads a vocabulary description from a CSV file (or stdin), parses it,
//! and writes the selected rendering to a file (or stdout).

use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::generator::{Generator, MediaWikiGenerator, OwlGenerator, TextileGenerator};
use crate::loader::{CsvOptions, CsvVocabLoader};
use vocabsheet_core::prelude::*;

/// Convert a CSV-embedded vocabulary description to a publishable format
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input CSV file (defaults to stdin)
    input: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Owl)]
    format: Format,

    /// Read tab-separated input
    #[arg(long)]
    tsv: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Available output formats
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Format {
    /// OWL RDF/XML schema
    Owl,
    /// MediaWiki table markup
    Mediawiki,
    /// Basecamp Textile table markup
    Textile,
    /// Raw parsed model as JSON, for inspection
    Json,
}

impl Format {
    fn render(self, vocab: &Vocabulary) -> Result<String> {
        match self {
            Self::Owl => OwlGenerator::new().generate(vocab),
            Self::Mediawiki => MediaWikiGenerator::new().generate(vocab),
            Self::Textile => TextileGenerator::new().generate(vocab),
            Self::Json => {
                serde_json::to_string_pretty(vocab).map_err(|e| VocabError::render(e.to_string()))
            }
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Owl => "owl",
            Self::Mediawiki => "mediawiki",
            Self::Textile => "textile",
            Self::Json => "json",
        }
    }
}

impl Cli {
    /// Execute the conversion described by the parsed arguments
    pub fn run(&self) -> Result<()> {
        let options = if self.tsv {
            CsvOptions::tsv()
        } else {
            CsvOptions::default()
        };
        let loader = CsvVocabLoader::with_options(options);
        let vocab = match &self.input {
            Some(path) => {
                tracing::info!(input = %path.display(), "reading vocabulary");
                loader.load_path(path)?
            }
            None => {
                tracing::info!("reading vocabulary from stdin");
                loader.load_reader(io::stdin().lock())?
            }
        };
        tracing::info!(
            format = self.format.name(),
            classes = vocab.classes().len(),
            prefixes = vocab.prefixes().len(),
            "rendering vocabulary"
        );
        let rendered = self.format.render(&vocab)?;
        match &self.output {
            Some(path) => {
                let mut file = File::create(path)?;
                file.write_all(rendered.as_bytes())?;
            }
            None => {
                io::stdout().write_all(rendered.as_bytes())?;
            }
        }
        Ok(())
    }
}

/// Parse arguments, set up logging, and run the conversion
pub fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.run() {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            std::process::ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_args_are_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_format_defaults_to_owl() {
        let cli = Cli::parse_from(["vocabsheet"]);
        assert!(matches!(cli.format, Format::Owl));
        assert!(cli.input.is_none());
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_format_selection() {
        let cli = Cli::parse_from(["vocabsheet", "--format", "mediawiki", "vocab.csv"]);
        assert!(matches!(cli.format, Format::Mediawiki));
        assert_eq!(cli.input.as_deref(), Some(std::path::Path::new("vocab.csv")));
    }
}
