//! Input front ends that feed rows to the parser

pub mod csv;

pub use csv::{CsvOptions, CsvVocabLoader};
