//! # vocabsheet Core
//!
//! Core types for the vocabsheet tabular vocabulary format.
//!
//! This crate provides the owned vocabulary model built by the row parser:
//! prefixes, classes with attributes and slots, cardinality constraints,
//! qname-aware URI types and the shared error taxonomy. Parsing and
//! rendering live in the `vocabsheet` service crate.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Error types for vocabulary parsing and rendering
pub mod error;

/// The vocabulary model aggregate and entity types
pub mod types;

/// URI and node types with rendering helpers
pub mod uri;

/// Commonly used types re-exported for convenience
pub mod prelude {
    pub use crate::error::{Result, VocabError};
    pub use crate::types::*;
    pub use crate::uri::{Node, VocabUri};
}
