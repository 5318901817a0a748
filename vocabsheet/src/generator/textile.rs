//! Basecamp Textile table generator
//!
//! Renders the vocabulary as an HTML table suitable for pasting into
//! Textile-formatted pages. Markup-significant characters in values are
//! replaced with character entities, and entries whose value is a raw URI
//! switch to a two-row layout so the URI gets the full table width.

use super::traits::Generator;
use std::fmt::Write;
use vocabsheet_core::prelude::*;

const PREAMBLE: &str = "<h2>Vocabulary summary</h2>\n\n<table valign=\"top\" class=\"tableclass\" id=\"tableid\" stype=\"border:0; padding:1; background:#FFEEEE;\">";
const POSTAMBLE: &str = "</table>\n\n";
const BLANK_ROW: &str = "<tr></tr>";
const NEW_STYLE: &str = "<tr style=\"background:#F8F8FF;\">";
const OLD_STYLE: &str = "<tr style=\"background:#F8F8FF; color:#606060;\">";
const COMMENT_STYLE: &str = "<tr style=\"background:#F8F8FF; color:#C00000; font-style:italic;\">";

/// Basecamp Textile table generator
#[derive(Debug, Clone, Copy, Default)]
pub struct TextileGenerator;

impl TextileGenerator {
    /// Create a new Textile generator
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn write_heading(out: &mut String, vocab: &Vocabulary) -> Result<()> {
        let heading = |idx: usize| match vocab.headings().get(idx) {
            Some(h) if !h.is_empty() => h.as_str(),
            _ => "&nbsp;",
        };
        write!(out, "<tr style=\"background:#E8E8F0;\">")?;
        for idx in 1..6 {
            write!(out, "<th>{}</th>", heading(idx))?;
        }
        write!(out, "</tr>")?;
        Ok(())
    }

    fn write_prefix(out: &mut String, prefix: &VocabPrefix) -> Result<()> {
        write!(
            out,
            "{NEW_STYLE}<td>@prefix</td><td>{}:</td><td colspan=\"3\">&lt;{}&gt;</td></tr>",
            prefix.name,
            prefix.namespace.uri()
        )?;
        Ok(())
    }

    /// Standard five-cell row
    fn write_entry(out: &mut String, is_new: bool, cells: [&str; 5]) -> Result<()> {
        out.push_str(if is_new { NEW_STYLE } else { OLD_STYLE });
        for cell in cells {
            write!(out, "<td valign=\"top\">{cell}</td>")?;
        }
        write!(out, "</tr>")?;
        Ok(())
    }

    /// Two-row layout used when the value cell holds a raw URI
    fn write_entry_long(out: &mut String, is_new: bool, cells: [&str; 5]) -> Result<()> {
        let style = if is_new { NEW_STYLE } else { OLD_STYLE };
        write!(
            out,
            "{style}<td rowspan=\"2\" valign=\"top\">{}</td><td rowspan=\"2\" valign=\"top\">{}</td><td colspan=\"3\">{}</td></tr>",
            cells[0], cells[1], cells[2]
        )?;
        write!(
            out,
            "{style}<td></td><td>{}</td><td>{}</td></tr>",
            cells[3], cells[4]
        )?;
        Ok(())
    }

    fn write_value_entry(
        out: &mut String,
        is_new: bool,
        long_form: bool,
        cells: [&str; 5],
    ) -> Result<()> {
        if long_form {
            Self::write_entry_long(out, is_new, cells)
        } else {
            Self::write_entry(out, is_new, cells)
        }
    }

    fn write_comments(out: &mut String, comments: &[String]) -> Result<()> {
        if !comments.is_empty() {
            write!(
                out,
                "{COMMENT_STYLE}<td></td><td></td><td></td><td></td><td>--&nbsp;{}</td></tr>",
                comments.join("<br/><br/>")
            )?;
        }
        Ok(())
    }

    fn write_class(out: &mut String, class: &VocabClass) -> Result<()> {
        let style = if class.is_new { NEW_STYLE } else { OLD_STYLE };
        write!(
            out,
            "{style}<td colspan=\"3\" valign=\"top\">{}</td><td valign=\"top\">{}</td><td valign=\"top\">{}</td></tr>",
            class.uri.escaped_qname_or_uri(),
            class.label,
            class.description
        )?;
        Self::write_comments(out, &class.comments)?;
        for attr in &class.attrs {
            let prop = marked_property(&attr.property, attr.is_inverse);
            Self::write_value_entry(
                out,
                attr.is_new,
                attr.value.is_full_uri(),
                [
                    "",
                    &prop,
                    &attr.value.escaped_value(),
                    &attr.label,
                    &attr.description,
                ],
            )?;
            Self::write_comments(out, &attr.comments)?;
        }
        for slot in &class.slots {
            let prop = marked_property(&slot.property, slot.is_inverse);
            let flag = match slot.cardinality.symbol() {
                '*' => "&#42;".to_string(),
                other => other.to_string(),
            };
            let styp = format!("{flag} :: {}", slot.value_type.escaped_qname_or_uri());
            Self::write_entry(
                out,
                slot.is_new,
                ["", &prop, &styp, &slot.label, &slot.description],
            )?;
            for assertion in &slot.assertions {
                let mut relation = assertion.relation.qname_or_uri();
                if relation == "rdfs:subPropertyOf" {
                    relation = "<=".to_string();
                }
                let value = format!("{relation} {}", assertion.value.escaped_value());
                Self::write_value_entry(
                    out,
                    false,
                    assertion.value.is_full_uri(),
                    ["", "", &value, &assertion.label, &assertion.description],
                )?;
            }
            Self::write_comments(out, &slot.comments)?;
        }
        Ok(())
    }
}

/// Property display text, with the caret entity restored for inverse marks
fn marked_property(property: &VocabUri, is_inverse: bool) -> String {
    let qname = property.qname_or_uri();
    if is_inverse {
        format!("&#94; {qname}")
    } else {
        qname
    }
}

impl Generator for TextileGenerator {
    fn name(&self) -> &'static str {
        "textile"
    }

    fn file_extension(&self) -> &'static str {
        "textile"
    }

    fn generate(&self, vocab: &Vocabulary) -> Result<String> {
        let mut out = String::new();
        out.push_str(PREAMBLE);
        Self::write_heading(&mut out, vocab)?;
        for item in vocab.sequence() {
            match *item {
                SequenceItem::Blank => out.push_str(BLANK_ROW),
                SequenceItem::Prefix(idx) => {
                    Self::write_prefix(&mut out, &vocab.prefixes()[idx])?;
                }
                SequenceItem::Class(idx) => {
                    Self::write_class(&mut out, &vocab.classes()[idx])?;
                }
            }
        }
        out.push_str(POSTAMBLE);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uri(prefix: &str, local: &str, namespace: &str) -> VocabUri {
        VocabUri::from_qname(prefix, local, namespace)
    }

    fn sample_vocab() -> Vocabulary {
        let mut vocab = Vocabulary::new();
        vocab.set_headings(
            ["", "Class", "Property", "Value", "", "Description", "Comment"]
                .iter()
                .map(ToString::to_string)
                .collect(),
        );
        vocab.add_prefix(VocabPrefix::new(
            "ex",
            VocabUri::from_absolute("http://example.org/ns#"),
            "",
            "",
        ));
        let idx = vocab.add_class(VocabClass::new(
            true,
            uri("ex", "Person", "http://example.org/ns#"),
            "Person",
            "",
        ));
        let class = vocab.class_mut(idx);
        class.add_slot(VocabSlot {
            is_new: true,
            is_inverse: false,
            property: uri("ex", "knows", "http://example.org/ns#"),
            cardinality: Cardinality::new(0, Cardinality::UNBOUNDED),
            value_type: uri("ex", "Person", "http://example.org/ns#"),
            label: "knows".to_string(),
            description: String::new(),
            comments: Vec::new(),
            assertions: Vec::new(),
        });
        vocab
    }

    #[test]
    fn test_empty_heading_cell_becomes_nbsp() {
        let output = TextileGenerator::new().generate(&sample_vocab()).unwrap();
        assert!(output.contains("<th>Value</th><th>&nbsp;</th><th>Description</th>"));
    }

    #[test]
    fn test_prefix_uri_is_entity_escaped() {
        let output = TextileGenerator::new().generate(&sample_vocab()).unwrap();
        assert!(output.contains("<td colspan=\"3\">&lt;http://example.org/ns#&gt;</td>"));
    }

    #[test]
    fn test_star_cardinality_uses_entity() {
        let output = TextileGenerator::new().generate(&sample_vocab()).unwrap();
        assert!(output.contains("<td valign=\"top\">&#42; :: ex:Person</td>"));
    }

    #[test]
    fn test_full_uri_value_uses_two_row_layout() {
        let mut vocab = sample_vocab();
        let class = vocab.class_mut(0);
        class.add_attr(VocabAttr {
            is_new: true,
            is_inverse: false,
            property: uri("ex", "seeAlso", "http://example.org/ns#"),
            value: Node::Uri(VocabUri::from_absolute("http://example.org/other")),
            label: "see also".to_string(),
            description: String::new(),
            comments: Vec::new(),
        });
        let output = TextileGenerator::new().generate(&vocab).unwrap();
        assert!(output.contains("<td colspan=\"3\">&lt;http://example.org/other&gt;</td>"));
        assert!(output.contains("<td rowspan=\"2\" valign=\"top\">ex:seeAlso</td>"));
        assert!(output.contains("<td></td><td>see also</td><td></td>"));
    }

    #[test]
    fn test_inverse_attr_uses_caret_entity() {
        let mut vocab = sample_vocab();
        let class = vocab.class_mut(0);
        class.add_attr(VocabAttr {
            is_new: false,
            is_inverse: true,
            property: uri("ex", "memberOf", "http://example.org/ns#"),
            value: Node::Uri(uri("ex", "Team", "http://example.org/ns#")),
            label: String::new(),
            description: String::new(),
            comments: Vec::new(),
        });
        let output = TextileGenerator::new().generate(&vocab).unwrap();
        assert!(output.contains("<td valign=\"top\">&#94; ex:memberOf</td>"));
    }

    #[test]
    fn test_comment_row_joins_with_breaks() {
        let mut vocab = sample_vocab();
        let class = vocab.class_mut(0);
        class.add_comment("first note");
        class.add_comment("second note");
        let output = TextileGenerator::new().generate(&vocab).unwrap();
        assert!(output.contains("--&nbsp;first note<br/><br/>second note"));
    }
}
