//! # Vocabsheet
//!
//! Parsing and rendering of row-oriented vocabulary descriptions embedded
//! in CSV spreadsheets.
//!
//! A vocabulary sheet declares namespace prefixes, classes, and the
//! attributes and typed slots of those classes, one row per statement.
//! This crate reads such a sheet into a [`vocabsheet_core::types::Vocabulary`]
//! model and renders it as an OWL RDF/XML schema, a MediaWiki table, or a
//! Basecamp Textile table.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use vocabsheet::generator::{Generator, OwlGenerator};
//! use vocabsheet::loader::CsvVocabLoader;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let vocab = CsvVocabLoader::new().load_path("vocab.csv".as_ref())?;
//!     let owl = OwlGenerator::new().generate(&vocab)?;
//!     print!("{owl}");
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod generator;
pub mod loader;
pub mod namespace;
pub mod parser;

/// Common imports for working with vocabulary sheets
pub mod prelude {
    pub use crate::generator::{
        Generator, MediaWikiGenerator, OwlGenerator, TextileGenerator,
    };
    pub use crate::loader::{CsvOptions, CsvVocabLoader};
    pub use crate::namespace::{resolve, resolve_node};
    pub use crate::parser::{RowState, VocabParser};
    pub use vocabsheet_core::prelude::*;
}
