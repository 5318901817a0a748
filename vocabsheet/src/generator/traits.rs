//! The renderer trait shared by all output formats

use vocabsheet_core::prelude::*;

/// A renderer over a finished, read-only vocabulary model
pub trait Generator {
    /// Name of this output format
    fn name(&self) -> &'static str;

    /// File extension for generated output
    fn file_extension(&self) -> &'static str;

    /// Render the vocabulary to a complete output document.
    ///
    /// # Errors
    ///
    /// Returns an error when the model contains a construct this output
    /// format cannot represent, such as an inverse-marked slot in RDF/XML.
    fn generate(&self, vocab: &Vocabulary) -> Result<String>;
}
