//! The vocabulary model: the owned aggregate built by the row parser
//!
//! A [`Vocabulary`] exclusively owns every entity reachable from it. The
//! display [`sequence`](Vocabulary::sequence) records the original input
//! layout (blank rows included) as indices into the owned prefix and class
//! lists, so renderers can reproduce the input ordering exactly.

use crate::uri::{Node, VocabUri};
use serde::{Deserialize, Serialize};

/// Cardinality constraint on a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cardinality {
    /// Minimum number of values
    pub min: u32,
    /// Maximum number of values; [`Cardinality::UNBOUNDED`] means no limit
    pub max: u32,
}

impl Cardinality {
    /// Reserved sentinel standing in for "no upper cardinality limit".
    /// Consumers must special-case this value when rendering an upper bound.
    pub const UNBOUNDED: u32 = u32::MAX;

    /// Create a new cardinality constraint
    #[must_use]
    pub fn new(min: u32, max: u32) -> Self {
        debug_assert!(min <= max);
        Self { min, max }
    }

    /// Map a cardinality symbol to its constraint:
    /// `?`→(0,1), `1`→(1,1), `*`→(0,unbounded), `+`→(1,unbounded)
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '?' => Some(Self::new(0, 1)),
            '1' => Some(Self::new(1, 1)),
            '*' => Some(Self::new(0, Self::UNBOUNDED)),
            '+' => Some(Self::new(1, Self::UNBOUNDED)),
            _ => None,
        }
    }

    /// Whether the upper bound is the unbounded sentinel
    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        self.max == Self::UNBOUNDED
    }

    /// The cardinality symbol for this constraint, used when re-rendering
    /// the tabular form
    #[must_use]
    pub fn symbol(&self) -> char {
        if self.min == 0 {
            if self.max == 1 { '?' } else { '*' }
        } else if self.max == 1 {
            '1'
        } else {
            '+'
        }
    }
}

/// A prefix→namespace binding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabPrefix {
    /// Prefix name without the trailing separator
    pub name: String,
    /// Namespace the prefix expands to (always an absolute URI)
    pub namespace: VocabUri,
    /// Display label
    pub label: String,
    /// Longer description
    pub description: String,
    /// Accumulated comments
    pub comments: Vec<String>,
}

impl VocabPrefix {
    /// Create a new prefix binding
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        namespace: VocabUri,
        label: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            namespace,
            label: label.into(),
            description: description.into(),
            comments: Vec::new(),
        }
    }

    /// Append a comment, ignoring empty text
    pub fn add_comment(&mut self, comment: impl Into<String>) {
        let comment = comment.into();
        if !comment.is_empty() {
            self.comments.push(comment);
        }
    }
}

/// A schema assertion about a class: property plus a URI-or-literal value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabAttr {
    /// Whether the row declaring this attribute was flagged as new
    pub is_new: bool,
    /// Whether the property was marked with the inverse marker `^`
    pub is_inverse: bool,
    /// Resolved property URI
    pub property: VocabUri,
    /// Value of the assertion
    pub value: Node,
    /// Display label
    pub label: String,
    /// Longer description
    pub description: String,
    /// Accumulated comments
    pub comments: Vec<String>,
}

impl VocabAttr {
    /// Append a comment, ignoring empty text
    pub fn add_comment(&mut self, comment: impl Into<String>) {
        let comment = comment.into();
        if !comment.is_empty() {
            self.comments.push(comment);
        }
    }
}

/// An assertion about a slot's property, e.g. that it is a sub-property of
/// some other property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotAssertion {
    /// Resolved relation URI
    pub relation: VocabUri,
    /// Value of the assertion
    pub value: Node,
    /// Display label
    pub label: String,
    /// Longer description
    pub description: String,
    /// Accumulated comments
    pub comments: Vec<String>,
}

/// A typed, cardinality-constrained property declaration on a class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabSlot {
    /// Whether the row declaring this slot was flagged as new
    pub is_new: bool,
    /// Whether the property was marked with the inverse marker `^`
    pub is_inverse: bool,
    /// Resolved property URI
    pub property: VocabUri,
    /// Cardinality constraint
    pub cardinality: Cardinality,
    /// Resolved value type URI
    pub value_type: VocabUri,
    /// Display label
    pub label: String,
    /// Longer description
    pub description: String,
    /// Accumulated comments
    pub comments: Vec<String>,
    /// Assertions about this slot's property, in appearance order
    pub assertions: Vec<SlotAssertion>,
}

impl VocabSlot {
    /// Append an assertion
    pub fn add_assertion(&mut self, assertion: SlotAssertion) {
        self.assertions.push(assertion);
    }

    /// Append a comment, ignoring empty text
    pub fn add_comment(&mut self, comment: impl Into<String>) {
        let comment = comment.into();
        if !comment.is_empty() {
            self.comments.push(comment);
        }
    }
}

/// A vocabulary class or frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabClass {
    /// Whether the class was declared (`+` flag) rather than referenced only
    pub is_new: bool,
    /// Resolved class URI
    pub uri: VocabUri,
    /// Display label
    pub label: String,
    /// Longer description
    pub description: String,
    /// Accumulated comments
    pub comments: Vec<String>,
    /// Plain attribute assertions, in appearance order
    pub attrs: Vec<VocabAttr>,
    /// Slot declarations, in appearance order
    pub slots: Vec<VocabSlot>,
}

impl VocabClass {
    /// Create a new class with no attributes or slots
    #[must_use]
    pub fn new(
        is_new: bool,
        uri: VocabUri,
        label: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            is_new,
            uri,
            label: label.into(),
            description: description.into(),
            comments: Vec::new(),
            attrs: Vec::new(),
            slots: Vec::new(),
        }
    }

    /// Append an attribute, returning its index
    pub fn add_attr(&mut self, attr: VocabAttr) -> usize {
        self.attrs.push(attr);
        self.attrs.len() - 1
    }

    /// Append a slot, returning its index
    pub fn add_slot(&mut self, slot: VocabSlot) -> usize {
        self.slots.push(slot);
        self.slots.len() - 1
    }

    /// Append a comment, ignoring empty text
    pub fn add_comment(&mut self, comment: impl Into<String>) {
        let comment = comment.into();
        if !comment.is_empty() {
            self.comments.push(comment);
        }
    }
}

/// One entry of the display sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SequenceItem {
    /// A wholly blank input row
    Blank,
    /// Index into [`Vocabulary::prefixes`]
    Prefix(usize),
    /// Index into [`Vocabulary::classes`]
    Class(usize),
}

/// A full vocabulary as read from one tabular input
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vocabulary {
    headings: Vec<String>,
    sequence: Vec<SequenceItem>,
    prefixes: Vec<VocabPrefix>,
    classes: Vec<VocabClass>,
}

impl Vocabulary {
    /// Create an empty vocabulary
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the column headings from the first input row
    pub fn set_headings(&mut self, headings: Vec<String>) {
        self.headings = headings;
    }

    /// Column headings in input order
    #[must_use]
    pub fn headings(&self) -> &[String] {
        &self.headings
    }

    /// The display sequence: prefixes, classes and blank markers in
    /// original input order
    #[must_use]
    pub fn sequence(&self) -> &[SequenceItem] {
        &self.sequence
    }

    /// Declared prefixes in input order
    #[must_use]
    pub fn prefixes(&self) -> &[VocabPrefix] {
        &self.prefixes
    }

    /// Classes in input order
    #[must_use]
    pub fn classes(&self) -> &[VocabClass] {
        &self.classes
    }

    /// Record a wholly blank input row
    pub fn add_blank(&mut self) {
        self.sequence.push(SequenceItem::Blank);
    }

    /// Append a prefix and its sequence entry, returning the prefix index
    pub fn add_prefix(&mut self, prefix: VocabPrefix) -> usize {
        self.prefixes.push(prefix);
        let idx = self.prefixes.len() - 1;
        self.sequence.push(SequenceItem::Prefix(idx));
        idx
    }

    /// Append a class and its sequence entry, returning the class index
    pub fn add_class(&mut self, class: VocabClass) -> usize {
        self.classes.push(class);
        let idx = self.classes.len() - 1;
        self.sequence.push(SequenceItem::Class(idx));
        idx
    }

    /// Mutable access to a class by index; used only while scanning rows
    pub fn class_mut(&mut self, idx: usize) -> &mut VocabClass {
        &mut self.classes[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cardinality_symbol_map() {
        assert_eq!(Cardinality::from_symbol('?'), Some(Cardinality::new(0, 1)));
        assert_eq!(Cardinality::from_symbol('1'), Some(Cardinality::new(1, 1)));
        assert_eq!(
            Cardinality::from_symbol('*'),
            Some(Cardinality::new(0, Cardinality::UNBOUNDED))
        );
        assert_eq!(
            Cardinality::from_symbol('+'),
            Some(Cardinality::new(1, Cardinality::UNBOUNDED))
        );
        assert_eq!(Cardinality::from_symbol('2'), None);
    }

    #[test]
    fn test_cardinality_symbol_roundtrip() {
        for symbol in ['?', '1', '*', '+'] {
            let card = Cardinality::from_symbol(symbol).expect("known symbol");
            assert_eq!(card.symbol(), symbol);
        }
    }

    #[test]
    fn test_unbounded_sentinel() {
        let card = Cardinality::from_symbol('*').expect("known symbol");
        assert!(card.is_unbounded());
        assert_eq!(card.max, Cardinality::UNBOUNDED);

        let bounded = Cardinality::from_symbol('1').expect("known symbol");
        assert!(!bounded.is_unbounded());
    }

    #[test]
    fn test_sequence_tracks_input_order() {
        let mut vocab = Vocabulary::new();
        vocab.add_blank();
        vocab.add_prefix(VocabPrefix::new(
            "ex",
            VocabUri::from_absolute("http://example.org/#"),
            "",
            "",
        ));
        vocab.add_blank();
        vocab.add_class(VocabClass::new(
            true,
            VocabUri::from_qname("ex", "Thing", "http://example.org/#"),
            "A Thing",
            "",
        ));

        assert_eq!(
            vocab.sequence(),
            &[
                SequenceItem::Blank,
                SequenceItem::Prefix(0),
                SequenceItem::Blank,
                SequenceItem::Class(0),
            ]
        );
        assert_eq!(vocab.prefixes().len(), 1);
        assert_eq!(vocab.classes().len(), 1);
    }

    #[test]
    fn test_empty_comments_are_dropped() {
        let mut class = VocabClass::new(false, VocabUri::from_absolute("#"), "", "");
        class.add_comment("");
        class.add_comment("real comment");
        assert_eq!(class.comments, vec!["real comment".to_string()]);
    }

    #[test]
    fn test_vocabulary_serde_roundtrip() {
        let mut vocab = Vocabulary::new();
        vocab.set_headings(vec!["f".to_string(), "c".to_string()]);
        vocab.add_prefix(VocabPrefix::new(
            "ex",
            VocabUri::from_absolute("http://example.org/#"),
            "Example",
            "",
        ));
        let idx = vocab.add_class(VocabClass::new(
            true,
            VocabUri::from_qname("ex", "Thing", "http://example.org/#"),
            "A Thing",
            "",
        ));
        vocab.class_mut(idx).add_slot(VocabSlot {
            is_new: true,
            is_inverse: false,
            property: VocabUri::from_qname("ex", "name", "http://example.org/#"),
            cardinality: Cardinality::new(0, Cardinality::UNBOUNDED),
            value_type: VocabUri::from_qname("ex", "Name", "http://example.org/#"),
            label: "name".to_string(),
            description: String::new(),
            comments: Vec::new(),
            assertions: Vec::new(),
        });

        let json = serde_json::to_string(&vocab).expect("serializes");
        let back: Vocabulary = serde_json::from_str(&json).expect("deserializes");
        assert_eq!(back, vocab);
    }
}
