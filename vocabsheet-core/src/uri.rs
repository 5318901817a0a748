//! URI and node types used by the vocabulary model
//!
//! A [`VocabUri`] preserves the qname pair it was expanded from when one is
//! known, so renderers can choose between the compact and the absolute form.
//! A [`Node`] is the value position of an assertion: a resolved URI or an
//! opaque literal.

use serde::{Deserialize, Serialize};

/// A fully resolved vocabulary URI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabUri {
    uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    local: Option<String>,
}

impl VocabUri {
    /// Create from an absolute URI with no known qname decomposition
    #[must_use]
    pub fn from_absolute(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            prefix: None,
            local: None,
        }
    }

    /// Create from a qname expanded against a namespace URI
    #[must_use]
    pub fn from_qname(prefix: impl Into<String>, local: impl Into<String>, namespace: &str) -> Self {
        let prefix = prefix.into();
        let local = local.into();
        Self {
            uri: format!("{namespace}{local}"),
            prefix: Some(prefix),
            local: Some(local),
        }
    }

    /// The fully expanded URI
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Whether a prefix/local pair is known for this URI
    #[must_use]
    pub fn has_name_pair(&self) -> bool {
        self.prefix.is_some() && self.local.is_some()
    }

    /// The prefix part of the qname, when one is known
    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// The local part of the qname, when one is known
    #[must_use]
    pub fn local(&self) -> Option<&str> {
        self.local.as_deref()
    }

    /// The compact `prefix:local` form, when one is known
    #[must_use]
    pub fn qname(&self) -> Option<String> {
        match (&self.prefix, &self.local) {
            (Some(p), Some(l)) => Some(format!("{p}:{l}")),
            _ => None,
        }
    }

    /// The qname form, falling back to the bracketed absolute URI
    #[must_use]
    pub fn qname_or_uri(&self) -> String {
        self.qname().unwrap_or_else(|| format!("<{}>", self.uri))
    }

    /// The qname form with the fallback URI escaped for markup output
    #[must_use]
    pub fn escaped_qname_or_uri(&self) -> String {
        self.qname()
            .unwrap_or_else(|| format!("&lt;{}&gt;", self.uri))
    }

    /// The `&prefix;local` entity form used in RDF/XML, falling back to the
    /// plain URI when no pair is known
    #[must_use]
    pub fn xml_entity(&self) -> String {
        match (&self.prefix, &self.local) {
            (Some(p), Some(l)) => format!("&{p};{l}"),
            _ => self.uri.clone(),
        }
    }
}

/// An RDF node: a resolved URI or an opaque literal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node {
    /// A resolved URI reference
    Uri(VocabUri),
    /// Raw literal text that matched neither the URI nor the qname form
    Literal(String),
}

impl Node {
    /// Whether this node is a URI reference
    #[must_use]
    pub fn is_uri(&self) -> bool {
        matches!(self, Self::Uri(_))
    }

    /// Whether this node is a URI with no known qname pair
    #[must_use]
    pub fn is_full_uri(&self) -> bool {
        matches!(self, Self::Uri(u) if !u.has_name_pair())
    }

    /// Display form: qname-or-URI for references, raw text for literals
    #[must_use]
    pub fn value(&self) -> String {
        match self {
            Self::Uri(u) => u.qname_or_uri(),
            Self::Literal(s) => s.clone(),
        }
    }

    /// XML form: entity reference for URIs; literals shed one layer of
    /// surrounding double quotes
    #[must_use]
    pub fn value_xml(&self) -> String {
        match self {
            Self::Uri(u) => u.xml_entity(),
            Self::Literal(s) => {
                let trimmed = s
                    .strip_prefix('"')
                    .and_then(|rest| rest.strip_suffix('"'))
                    .unwrap_or(s);
                trimmed.to_string()
            }
        }
    }

    /// Markup-escaped form: escaped qname-or-URI for references, raw text
    /// for literals
    #[must_use]
    pub fn escaped_value(&self) -> String {
        match self {
            Self::Uri(u) => u.escaped_qname_or_uri(),
            Self::Literal(s) => s.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_qname_forms() {
        let uri = VocabUri::from_qname("ex", "Thing", "http://example.org/#");
        assert_eq!(uri.uri(), "http://example.org/#Thing");
        assert_eq!(uri.qname(), Some("ex:Thing".to_string()));
        assert_eq!(uri.qname_or_uri(), "ex:Thing");
        assert_eq!(uri.escaped_qname_or_uri(), "ex:Thing");
        assert_eq!(uri.xml_entity(), "&ex;Thing");
    }

    #[test]
    fn test_absolute_uri_forms() {
        let uri = VocabUri::from_absolute("http://a.b/see-also");
        assert!(!uri.has_name_pair());
        assert_eq!(uri.qname(), None);
        assert_eq!(uri.qname_or_uri(), "<http://a.b/see-also>");
        assert_eq!(uri.escaped_qname_or_uri(), "&lt;http://a.b/see-also&gt;");
        assert_eq!(uri.xml_entity(), "http://a.b/see-also");
    }

    #[test]
    fn test_literal_node_sheds_quotes_in_xml_form() {
        let node = Node::Literal("\"label text\"".to_string());
        assert_eq!(node.value(), "\"label text\"");
        assert_eq!(node.value_xml(), "label text");

        let bare = Node::Literal("value1".to_string());
        assert_eq!(bare.value_xml(), "value1");
        assert_eq!(bare.escaped_value(), "value1");
    }

    #[test]
    fn test_uri_node_forms() {
        let node = Node::Uri(VocabUri::from_qname("pre", "val", "prefix#"));
        assert!(node.is_uri());
        assert!(!node.is_full_uri());
        assert_eq!(node.value(), "pre:val");
        assert_eq!(node.value_xml(), "&pre;val");

        let full = Node::Uri(VocabUri::from_absolute("second-see-also"));
        assert!(full.is_full_uri());
        assert_eq!(full.value(), "<second-see-also>");
        assert_eq!(full.escaped_value(), "&lt;second-see-also&gt;");
    }
}
