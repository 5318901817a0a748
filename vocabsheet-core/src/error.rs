//! Error types for vocabulary parsing and rendering

use thiserror::Error;

/// Main error type for vocabsheet operations
#[derive(Error, Debug)]
pub enum VocabError {
    /// A qname references a prefix that has not been declared
    #[error("line {line}: prefix '{prefix}' is not defined (in '{token}')")]
    PrefixUndefined {
        /// Prefix that was not found in the prefix table
        prefix: String,
        /// Token in which the prefix appeared
        token: String,
        /// 1-based input line number
        line: u64,
    },

    /// A token is neither a bracketed URI nor a valid qname where one is required
    #[error("line {line}: expected <uri> or qname, got '{token}'")]
    MalformedReference {
        /// Offending token
        token: String,
        /// 1-based input line number
        line: u64,
    },

    /// A sub-property assertion row with no preceding slot on the current class
    #[error("line {line}: sub-property assertion with no preceding slot")]
    DanglingAssertion {
        /// 1-based input line number
        line: u64,
    },

    /// An inverse-marked slot cannot be represented in the selected output format
    #[error("inverse slot property '{property}' is not supported by this output format")]
    UnsupportedInverseSlot {
        /// Qname or URI of the offending slot property
        property: String,
    },

    /// Syntax error reported by the underlying row stream
    #[error("line {line}: {message}")]
    RowSyntax {
        /// 1-based input line number
        line: u64,
        /// Description from the row reader
        message: String,
    },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Output rendering errors
    #[error("render error: {0}")]
    Render(String),
}

/// Result type alias for vocabsheet operations
pub type Result<T> = std::result::Result<T, VocabError>;

impl VocabError {
    /// Create a new undefined-prefix error
    #[must_use]
    pub fn prefix_undefined(prefix: impl Into<String>, token: impl Into<String>, line: u64) -> Self {
        Self::PrefixUndefined {
            prefix: prefix.into(),
            token: token.into(),
            line,
        }
    }

    /// Create a new malformed-reference error
    #[must_use]
    pub fn malformed(token: impl Into<String>, line: u64) -> Self {
        Self::MalformedReference {
            token: token.into(),
            line,
        }
    }

    /// Create a new dangling-assertion error
    #[must_use]
    pub fn dangling_assertion(line: u64) -> Self {
        Self::DanglingAssertion { line }
    }

    /// Create a new unsupported-inverse-slot error
    #[must_use]
    pub fn inverse_slot(property: impl Into<String>) -> Self {
        Self::UnsupportedInverseSlot {
            property: property.into(),
        }
    }

    /// Create a new row-syntax error
    #[must_use]
    pub fn row_syntax(line: u64, message: impl Into<String>) -> Self {
        Self::RowSyntax {
            line,
            message: message.into(),
        }
    }

    /// Create a new render error
    #[must_use]
    pub fn render(message: impl Into<String>) -> Self {
        Self::Render(message.into())
    }

    /// The input line number carried by this error, if any
    #[must_use]
    pub fn line(&self) -> Option<u64> {
        match self {
            Self::PrefixUndefined { line, .. }
            | Self::MalformedReference { line, .. }
            | Self::DanglingAssertion { line }
            | Self::RowSyntax { line, .. } => Some(*line),
            _ => None,
        }
    }
}

// Renderers assemble output with `std::fmt::Write`
impl From<std::fmt::Error> for VocabError {
    fn from(err: std::fmt::Error) -> Self {
        Self::Render(err.to_string())
    }
}
