//! MediaWiki table generator
//!
//! Renders the full vocabulary, blanks and referenced entries included, as
//! a wiki table that mirrors the layout of the source sheet. Declared
//! entries use the normal row style; referenced-only entries are greyed
//! out; comments get their own italic red rows.

use super::traits::Generator;
use std::fmt::Write;
use vocabsheet_core::prelude::*;

const PREAMBLE: &str = "== Vocabulary summary ==\n\n{| border=\"0\" padding=\"1\" style=\"background:#FFFFFF\"\n";
const POSTAMBLE: &str = "|}\n\n";
const BLANK_ROW: &str = "|- style=\"background:#FFFFFF\"\n|||||||||\n";
const NEW_STYLE: &str = "|- style=\"background:#F8F8FF\"\n";
const OLD_STYLE: &str = "|- style=\"background:#F8F8FF; color:#808080;\"\n";
const COMMENT_STYLE: &str = "|- style=\"background:#F8F8FF; color:#C00000; font-style:italic;\"\n";

/// MediaWiki table generator
#[derive(Debug, Clone, Copy, Default)]
pub struct MediaWikiGenerator;

impl MediaWikiGenerator {
    /// Create a new MediaWiki generator
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn write_heading(out: &mut String, vocab: &Vocabulary) -> Result<()> {
        let heading = |idx: usize| vocab.headings().get(idx).map_or("", String::as_str);
        writeln!(out, "|- style=\"background:#E8E8F0\"")?;
        writeln!(
            out,
            "! {} !! {} !! {} !! {} !! {}",
            heading(1),
            heading(2),
            heading(3),
            heading(4),
            heading(5)
        )?;
        Ok(())
    }

    fn write_prefix(out: &mut String, prefix: &VocabPrefix) -> Result<()> {
        writeln!(out, "|- style=\"background:#F8F8FF\"")?;
        writeln!(
            out,
            "| @prefix ||{}:||colspan=\"3\"|<{}>",
            prefix.name,
            prefix.namespace.uri()
        )?;
        Ok(())
    }

    fn write_entry(
        out: &mut String,
        is_new: bool,
        cells: [&str; 5],
    ) -> Result<()> {
        out.push_str(if is_new { NEW_STYLE } else { OLD_STYLE });
        writeln!(
            out,
            "|{}||{}||{}||{}||{}",
            cells[0], cells[1], cells[2], cells[3], cells[4]
        )?;
        Ok(())
    }

    fn write_comments(out: &mut String, comments: &[String]) -> Result<()> {
        if !comments.is_empty() {
            out.push_str(COMMENT_STYLE);
            writeln!(out, "|  ||  ||  ||  || -- {}", comments.join("\n\n"))?;
        }
        Ok(())
    }

    fn write_class(out: &mut String, class: &VocabClass) -> Result<()> {
        Self::write_entry(
            out,
            class.is_new,
            [
                &class.uri.qname_or_uri(),
                "",
                "",
                &class.label,
                &class.description,
            ],
        )?;
        Self::write_comments(out, &class.comments)?;
        for attr in &class.attrs {
            let prop = marked_property(&attr.property, attr.is_inverse);
            Self::write_entry(
                out,
                attr.is_new,
                ["", &prop, &attr.value.value(), &attr.label, &attr.description],
            )?;
            Self::write_comments(out, &attr.comments)?;
        }
        for slot in &class.slots {
            let prop = marked_property(&slot.property, slot.is_inverse);
            let styp = format!(
                "{} :: {}",
                slot.cardinality.symbol(),
                slot.value_type.qname_or_uri()
            );
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
                let value = format!("{relation} {}", assertion.value.value());
                Self::write_entry(
                    out,
                    false,
                    ["", "", &value, &assertion.label, &assertion.description],
                )?;
            }
            Self::write_comments(out, &slot.comments)?;
        }
        Ok(())
    }
}

/// Property display text, with the inverse marker restored when set
fn marked_property(property: &VocabUri, is_inverse: bool) -> String {
    let qname = property.qname_or_uri();
    if is_inverse {
        format!("^ {qname}")
    } else {
        qname
    }
}

impl Generator for MediaWikiGenerator {
    fn name(&self) -> &'static str {
        "mediawiki"
    }

    fn file_extension(&self) -> &'static str {
        "wiki"
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
