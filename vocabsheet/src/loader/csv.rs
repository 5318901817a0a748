//! CSV front end for the vocabulary parser
//!
//! Quoting and escaping are handled here by the `csv` crate; the parser
//! only ever sees already-split field values plus the current line number.

use crate::parser::{Record, VocabParser};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;
use vocabsheet_core::prelude::*;

/// Options for reading the tabular input
#[derive(Debug, Clone)]
pub struct CsvOptions {
    /// Field delimiter (default: `,`)
    pub delimiter: u8,
    /// Whether to trim whitespace around fields
    pub trim: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: true,
        }
    }
}

impl CsvOptions {
    /// Options for tab-separated input
    #[must_use]
    pub fn tsv() -> Self {
        Self {
            delimiter: b'\t',
            ..Default::default()
        }
    }
}

/// CSV loader producing a parsed [`Vocabulary`]
#[derive(Debug, Clone, Default)]
pub struct CsvVocabLoader {
    options: CsvOptions,
}

impl CsvVocabLoader {
    /// Create a loader with default options
    #[must_use]
    pub fn new() -> Self {
        Self {
            options: CsvOptions::default(),
        }
    }

    /// Create a loader with custom options
    #[must_use]
    pub fn with_options(options: CsvOptions) -> Self {
        Self { options }
    }

    /// Load a vocabulary from a file.
    ///
    /// # Errors
    ///
    /// Returns IO errors for an unreadable path, `RowSyntax` for CSV-level
    /// syntax problems, and the parser's error taxonomy for grammar
    /// failures; every error carries the 1-based input line number.
    pub fn load_path(&self, path: &Path) -> Result<Vocabulary> {
        debug!(path = %path.display(), "loading vocabulary");
        let file = File::open(path)?;
        self.load_reader(file)
    }

    /// Load a vocabulary from any reader.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`CsvVocabLoader::load_path`].
    pub fn load_reader<R: Read>(&self, reader: R) -> Result<Vocabulary> {
        let mut csv_reader = ReaderBuilder::new()
            .delimiter(self.options.delimiter)
            .has_headers(false)
            .flexible(true)
            .trim(if self.options.trim { Trim::All } else { Trim::None })
            .from_reader(reader);

        let records = csv_reader.records().enumerate().map(|(idx, result)| {
            let fallback_line = idx as u64 + 1;
            match result {
                Ok(record) => {
                    let line = record
                        .position()
                        .map_or(fallback_line, csv::Position::line);
                    Ok(Record::new(
                        line,
                        record.iter().map(ToString::to_string).collect(),
                    ))
                }
                Err(err) => {
                    let line = err
                        .position()
                        .map_or(fallback_line, csv::Position::line);
                    Err(VocabError::row_syntax(line, err.to_string()))
                }
            }
        });

        VocabParser::new().parse_records(records)
    }
}
