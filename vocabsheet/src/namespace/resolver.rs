//! Qname and URI resolution against the declared prefix table
//!
//! Two resolution capabilities are exposed: [`resolve`] for positions that
//! must produce a URI (class, property and type tokens), and
//! [`resolve_node`] for value positions, where a token matching neither the
//! bracketed-URI nor the qname form is kept as an opaque literal.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;
use vocabsheet_core::prelude::*;

/// Qname form accepted in reference positions: `.` and `-` are legal in
/// both the prefix and the local part
static QNAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([-.\w]+):([-.\w]+)").expect("valid qname regex pattern")
});

/// Bracketed absolute URI form
static URI_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^<([^>]*)>").expect("valid URI regex pattern"));

/// Narrower qname form used to decide whether a value token is a reference
/// at all; anything failing both this and the URI form is a literal
static NODE_QNAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w+):(\w+)").expect("valid node qname regex pattern"));

/// Resolve a token that must name a URI.
///
/// A bracketed `<uri>` is used verbatim. A `prefix:local` pair is scanned
/// against `table` in declaration order; the first matching prefix wins.
/// When `table` is `None` (a resolution context with no prefix table, such
/// as a prefix declaration's own namespace), any qname form is malformed.
///
/// # Errors
///
/// Returns [`VocabError::PrefixUndefined`] for a qname whose prefix is not
/// in the table, and [`VocabError::MalformedReference`] for any token that
/// is neither form where a URI is required.
pub fn resolve(token: &str, table: Option<&[VocabPrefix]>, line: u64) -> Result<VocabUri> {
    debug!(token, line, "resolving reference");
    if let Some(captures) = QNAME_REGEX.captures(token) {
        let prefix = captures
            .get(1)
            .ok_or_else(|| VocabError::malformed(token, line))?
            .as_str();
        let local = captures
            .get(2)
            .ok_or_else(|| VocabError::malformed(token, line))?
            .as_str();
        let Some(table) = table else {
            return Err(VocabError::malformed(token, line));
        };
        // Declaration order, first match wins
        for entry in table {
            if entry.name == prefix {
                return Ok(VocabUri::from_qname(prefix, local, entry.namespace.uri()));
            }
        }
        return Err(VocabError::prefix_undefined(prefix, token, line));
    }
    if let Some(captures) = URI_REGEX.captures(token) {
        let uri = captures
            .get(1)
            .ok_or_else(|| VocabError::malformed(token, line))?
            .as_str();
        return Ok(VocabUri::from_absolute(uri));
    }
    Err(VocabError::malformed(token, line))
}

/// Resolve a value token into a [`Node`].
///
/// Like [`resolve`], but a token matching neither the bracketed-URI nor the
/// qname form becomes a literal node instead of failing.
///
/// # Errors
///
/// Returns the same errors as [`resolve`] when the token does look like a
/// reference but cannot be resolved.
pub fn resolve_node(token: &str, table: Option<&[VocabPrefix]>, line: u64) -> Result<Node> {
    if !NODE_QNAME_REGEX.is_match(token) && !URI_REGEX.is_match(token) {
        debug!(token, line, "keeping value as literal");
        return Ok(Node::Literal(token.to_string()));
    }
    resolve(token, table, line).map(Node::Uri)
}
