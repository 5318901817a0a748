//! Raw row normalization and classification

use serde::{Deserialize, Serialize};

/// One record as delivered by the row stream: split field values plus the
/// 1-based input line number for error reporting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// 1-based input line number
    pub line: u64,
    /// Field values in column order
    pub fields: Vec<String>,
}

impl Record {
    /// Create a record from owned field values
    #[must_use]
    pub fn new(line: u64, fields: Vec<String>) -> Self {
        Self { line, fields }
    }
}

/// A record normalized to exactly the seven positional fields of the row
/// grammar; missing trailing fields become empty strings, extras are
/// discarded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// 1-based input line number
    pub line: u64,
    /// Flag column (`@`, `#`, `+` or empty)
    pub flag: String,
    /// Class token
    pub class_tok: String,
    /// Property token
    pub prop_tok: String,
    /// Value token
    pub value_tok: String,
    /// Display label
    pub label: String,
    /// Longer description
    pub description: String,
    /// Trailing comment
    pub comment: String,
}

/// Row classification, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// `@ prefix` declaration row
    Prefix,
    /// Wholly empty row; a blank marker in the display sequence
    Blank,
    /// Full-line comment row (`#` flag); skipped entirely
    Comment,
    /// Substantive row: class, slot, attribute or assertion content
    Entry,
}

impl RawRow {
    /// Normalize a record to the seven-field row shape
    #[must_use]
    pub fn from_record(record: Record) -> Self {
        let mut fields = record.fields;
        fields.resize(7, String::new());
        let mut fields = fields.into_iter();
        Self {
            line: record.line,
            flag: fields.next().unwrap_or_default(),
            class_tok: fields.next().unwrap_or_default(),
            prop_tok: fields.next().unwrap_or_default(),
            value_tok: fields.next().unwrap_or_default(),
            label: fields.next().unwrap_or_default(),
            description: fields.next().unwrap_or_default(),
            comment: fields.next().unwrap_or_default(),
        }
    }

    /// Classify this row; the order of the checks is the grammar's
    /// priority order
    #[must_use]
    pub fn classify(&self) -> RowKind {
        if self.flag == "@" && self.class_tok == "prefix" {
            RowKind::Prefix
        } else if self.class_tok.is_empty()
            && self.prop_tok.is_empty()
            && self.value_tok.is_empty()
            && self.label.is_empty()
            && self.description.is_empty()
            && self.comment.is_empty()
        {
            RowKind::Blank
        } else if self.flag == "#" {
            RowKind::Comment
        } else {
            RowKind::Entry
        }
    }
}
