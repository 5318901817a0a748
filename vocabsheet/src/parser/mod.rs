//! The row-parser state machine
//!
//! Consumes one tabular row at a time and builds the [`Vocabulary`] model.
//! The carried-over parse state is an explicit [`RowState`] value passed
//! into and returned from each row-handling step, so every transition is
//! independently testable.

pub mod row;

pub use row::{RawRow, Record, RowKind};

use crate::namespace::{resolve, resolve_node};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;
use vocabsheet_core::prelude::*;

/// Relation recorded by the sub-property-assertion form (`<=`)
const SUBPROPERTY_RELATION: &str = "rdfs:subPropertyOf";

/// Value-token sub-forms: optional cardinality symbol plus `::` separator,
/// or a leading `<=` relation marker; the remainder is the value text
static VALUE_FORM_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:([?1*+])\s*::)?\s*(<=)?\s*(.*)$").expect("valid value form regex pattern")
});

/// Reference to the slot or attribute most recently started, which receives
/// further assertions and comments from later rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyRef {
    /// Attribute `attr` of class `class`
    Attr {
        /// Class index in the vocabulary
        class: usize,
        /// Attribute index within the class
        attr: usize,
    },
    /// Slot `slot` of class `class`
    Slot {
        /// Class index in the vocabulary
        class: usize,
        /// Slot index within the class
        slot: usize,
    },
}

/// Parse state carried across rows of one parse
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowState {
    /// Class most recently started, receiving attributes and slots
    pub current_class: Option<usize>,
    /// Property most recently started, receiving assertions and comments
    pub current_property: Option<PropertyRef>,
    /// Raw property token of the previous property row; a value-only row
    /// continues this property
    pub previous_property_token: Option<String>,
}

/// The three mutually exclusive value-token sub-forms
#[derive(Debug, PartialEq, Eq)]
enum ValueForm {
    Slot(Cardinality, String),
    Assertion(String),
    Attr(String),
}

fn classify_value(value_tok: &str) -> ValueForm {
    let captures = VALUE_FORM_REGEX
        .captures(value_tok)
        .expect("value form regex matches any string");
    let rest = captures.get(3).map_or("", |m| m.as_str()).to_string();
    if let Some(symbol) = captures.get(1) {
        let symbol = symbol.as_str().chars().next().expect("one-char group");
        let cardinality = Cardinality::from_symbol(symbol).expect("symbol class is exhaustive");
        ValueForm::Slot(cardinality, rest)
    } else if captures.get(2).is_some() {
        ValueForm::Assertion(rest)
    } else {
        ValueForm::Attr(rest)
    }
}

/// Strip an optional leading inverse marker, returning the marker presence
/// and the remaining property text
fn strip_inverse(prop_tok: &str) -> (bool, &str) {
    let trimmed = prop_tok.trim_start();
    match trimmed.strip_prefix('^') {
        Some(rest) => (true, rest.trim_start()),
        None => (false, trimmed),
    }
}

/// Prefix name from the property column of a `@ prefix` row: leading
/// whitespace and everything from the first separator on are dropped
fn prefix_name(prop_tok: &str) -> &str {
    let trimmed = prop_tok.trim_start();
    match trimmed.find(':') {
        Some(idx) => &trimmed[..idx],
        None => trimmed,
    }
}

/// Parser for the tabular vocabulary format
#[derive(Debug, Clone, Copy, Default)]
pub struct VocabParser;

impl VocabParser {
    /// Create a new parser
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Parse a stream of records into a vocabulary.
    ///
    /// The first record supplies the column headings; every later record is
    /// one row of the grammar. The parse is strictly sequential and aborts
    /// on the first error; no partial model is returned.
    ///
    /// # Errors
    ///
    /// Propagates row-stream errors and fails on unresolved or malformed
    /// references, dangling assertions, and rows that need context the
    /// input has not established.
    pub fn parse_records<I>(&self, records: I) -> Result<Vocabulary>
    where
        I: IntoIterator<Item = Result<Record>>,
    {
        let mut vocab = Vocabulary::new();
        let mut state = RowState::default();
        let mut records = records.into_iter();
        match records.next() {
            Some(first) => vocab.set_headings(first?.fields),
            None => return Ok(vocab),
        }
        for record in records {
            let row = RawRow::from_record(record?);
            state = self.process_row(&mut vocab, state, &row)?;
        }
        Ok(vocab)
    }

    /// Process one normalized row, returning the next parse state.
    ///
    /// # Errors
    ///
    /// Fails when a reference token cannot be resolved, when an assertion
    /// row has no pending slot, or when a property row appears before any
    /// class.
    pub fn process_row(
        &self,
        vocab: &mut Vocabulary,
        state: RowState,
        row: &RawRow,
    ) -> Result<RowState> {
        let kind = row.classify();
        debug!(line = row.line, ?kind, "processing row");
        match kind {
            RowKind::Prefix => {
                let namespace = resolve(&row.value_tok, None, row.line)?;
                let mut prefix = VocabPrefix::new(
                    prefix_name(&row.prop_tok),
                    namespace,
                    &row.label,
                    &row.description,
                );
                prefix.add_comment(&row.comment);
                vocab.add_prefix(prefix);
                Ok(state)
            }
            RowKind::Blank => {
                vocab.add_blank();
                Ok(state)
            }
            RowKind::Comment => Ok(state),
            RowKind::Entry => self.process_entry(vocab, state, row),
        }
    }

    fn process_entry(
        &self,
        vocab: &mut Vocabulary,
        mut state: RowState,
        row: &RawRow,
    ) -> Result<RowState> {
        let line = row.line;
        let is_new = row.flag == "+";
        let mut label = row.label.clone();
        let mut description = row.description.clone();
        let mut comment = row.comment.clone();

        if !row.class_tok.is_empty() {
            let uri = resolve(&row.class_tok, Some(vocab.prefixes()), line)?;
            let mut class = VocabClass::new(is_new, uri, label.as_str(), description.as_str());
            class.add_comment(comment.as_str());
            let idx = vocab.add_class(class);
            state = RowState {
                current_class: Some(idx),
                current_property: None,
                previous_property_token: None,
            };
            // The row's descriptive fields belong to the class and must not
            // be reapplied to a property started on the same row
            label.clear();
            description.clear();
            comment.clear();
        }

        // A value-only row continues the previously named property
        let mut prop_tok = row.prop_tok.clone();
        if !row.value_tok.is_empty() && prop_tok.is_empty() {
            prop_tok = state.previous_property_token.clone().unwrap_or_default();
        }

        if !prop_tok.is_empty() {
            let class_idx = state.current_class.ok_or_else(|| {
                VocabError::row_syntax(line, "property row with no preceding class")
            })?;
            let (is_inverse, prop_ref_tok) = strip_inverse(&prop_tok);
            let comments = if comment.is_empty() {
                Vec::new()
            } else {
                vec![comment.clone()]
            };

            match classify_value(&row.value_tok) {
                ValueForm::Slot(cardinality, type_tok) => {
                    let property = resolve(prop_ref_tok, Some(vocab.prefixes()), line)?;
                    let value_type = resolve(&type_tok, Some(vocab.prefixes()), line)?;
                    let slot = VocabSlot {
                        is_new,
                        is_inverse,
                        property,
                        cardinality,
                        value_type,
                        label: label.clone(),
                        description: description.clone(),
                        comments,
                        assertions: Vec::new(),
                    };
                    let slot_idx = vocab.class_mut(class_idx).add_slot(slot);
                    state.current_property = Some(PropertyRef::Slot {
                        class: class_idx,
                        slot: slot_idx,
                    });
                }
                ValueForm::Assertion(value_tok) => {
                    let Some(PropertyRef::Slot { class, slot }) = state.current_property else {
                        return Err(VocabError::dangling_assertion(line));
                    };
                    let relation = resolve(SUBPROPERTY_RELATION, Some(vocab.prefixes()), line)?;
                    let value = resolve_node(&value_tok, Some(vocab.prefixes()), line)?;
                    let assertion = SlotAssertion {
                        relation,
                        value,
                        label: label.clone(),
                        description: description.clone(),
                        comments,
                    };
                    vocab.class_mut(class).slots[slot].add_assertion(assertion);
                }
                ValueForm::Attr(value_tok) => {
                    let property = resolve(prop_ref_tok, Some(vocab.prefixes()), line)?;
                    let value = resolve_node(&value_tok, Some(vocab.prefixes()), line)?;
                    let attr = VocabAttr {
                        is_new,
                        is_inverse,
                        property,
                        value,
                        label: label.clone(),
                        description: description.clone(),
                        comments,
                    };
                    let attr_idx = vocab.class_mut(class_idx).add_attr(attr);
                    state.current_property = Some(PropertyRef::Attr {
                        class: class_idx,
                        attr: attr_idx,
                    });
                }
            }
            state.previous_property_token = Some(prop_tok);
            comment.clear();
        }

        // A remaining trailing comment attaches to the class when no
        // property is pending, otherwise to the pending property
        if !comment.is_empty() {
            match state.current_property {
                Some(PropertyRef::Attr { class, attr }) => {
                    vocab.class_mut(class).attrs[attr].add_comment(comment);
                }
                Some(PropertyRef::Slot { class, slot }) => {
                    vocab.class_mut(class).slots[slot].add_comment(comment);
                }
                None => {
                    if let Some(idx) = state.current_class {
                        vocab.class_mut(idx).add_comment(comment);
                    }
                    // With no class either, the comment is discarded
                }
            }
        }

        Ok(state)
    }
}
