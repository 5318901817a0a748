//! OWL RDF/XML schema generator
//!
//! Renders the declared (`+`-flagged) classes of a vocabulary as an OWL
//! schema document. Prefixes become DOCTYPE entities and `xmlns`
//! declarations; slots become property restrictions; inverse `rdf:type`
//! attributes become enumerations and inverse `rdfs:subClassOf` attributes
//! become unions. Inverse-marked slots cannot be represented in this
//! format and are rejected.

use super::traits::Generator;
use std::fmt::Write;
use vocabsheet_core::prelude::*;

/// OWL RDF/XML generator
#[derive(Debug, Clone, Copy, Default)]
pub struct OwlGenerator;

impl OwlGenerator {
    /// Create a new OWL generator
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn write_preamble(out: &mut String, vocab: &Vocabulary) -> Result<()> {
        writeln!(out, "<?xml version=\"1.0\"?>")?;
        writeln!(out)?;
        writeln!(out, "<!DOCTYPE rdf:RDF [")?;
        for prefix in vocab.prefixes() {
            writeln!(
                out,
                "    <!ENTITY {} \"{}\" >",
                prefix.name,
                prefix.namespace.uri()
            )?;
        }
        writeln!(out, "]>")?;
        writeln!(out)?;
        writeln!(out, "<rdf:RDF ")?;
        for prefix in vocab.prefixes() {
            writeln!(
                out,
                "      xmlns:{}=\"{}\"",
                prefix.name,
                prefix.namespace.uri()
            )?;
        }
        writeln!(out, "    >")?;
        writeln!(out)?;
        writeln!(out, "    <owl:Ontology rdf:about=\"\"/>")?;
        writeln!(out)?;
        Ok(())
    }

    /// Property descriptions for every slot of a declared class
    fn write_slot_properties(out: &mut String, vocab: &Vocabulary) -> Result<()> {
        for class in vocab.classes().iter().filter(|c| c.is_new) {
            for slot in &class.slots {
                let datatype = slot.value_type.qname().as_deref() == Some("rdfs:Literal")
                    || slot.value_type.prefix() == Some("xsd");
                let element = if datatype {
                    "owl:DatatypeProperty"
                } else {
                    "owl:ObjectProperty"
                };
                writeln!(
                    out,
                    "    <{element} rdf:about=\"{}\">",
                    slot.property.xml_entity()
                )?;
                if !slot.label.is_empty() {
                    writeln!(out, "        <rdfs:label>{}</rdfs:label>", slot.label)?;
                }
                if !slot.description.is_empty() {
                    writeln!(
                        out,
                        "        <rdfs:comment\n            >{}</rdfs:comment>",
                        slot.description
                    )?;
                }
                writeln!(out, "    </{element}>")?;
                writeln!(out)?;
            }
        }
        Ok(())
    }

    fn write_restriction(out: &mut String, property: &str, constraint: &str) -> Result<()> {
        writeln!(out, "        <rdfs:subClassOf>")?;
        writeln!(out, "            <owl:Restriction>")?;
        writeln!(
            out,
            "                <owl:onProperty rdf:resource=\"{property}\"/>"
        )?;
        writeln!(out, "                {constraint}")?;
        writeln!(out, "            </owl:Restriction>")?;
        writeln!(out, "        </rdfs:subClassOf>")?;
        Ok(())
    }

    fn write_class(out: &mut String, class: &VocabClass) -> Result<()> {
        writeln!(out, "    <owl:Class rdf:about=\"{}\">", class.uri.xml_entity())?;
        if !class.label.is_empty() {
            writeln!(out, "        <rdfs:label>{}</rdfs:label>", class.label)?;
        }
        if !class.description.is_empty() {
            writeln!(
                out,
                "        <rdfs:comment\n            >{}</rdfs:comment>",
                class.description
            )?;
        }
        for attr in class.attrs.iter().filter(|a| !a.is_inverse) {
            let element = property_element(&attr.property);
            if attr.value.is_uri() {
                writeln!(
                    out,
                    "        <{element} rdf:resource=\"{}\"/>",
                    attr.value.value_xml()
                )?;
            } else {
                writeln!(
                    out,
                    "        <{element}>{}</{element}>",
                    attr.value.value_xml()
                )?;
            }
        }
        for slot in &class.slots {
            if slot.is_inverse {
                return Err(VocabError::inverse_slot(slot.property.qname_or_uri()));
            }
            let property = slot.property.xml_entity();
            Self::write_restriction(
                out,
                &property,
                &format!(
                    "<owl:allValuesFrom rdf:resource=\"{}\"/>",
                    slot.value_type.xml_entity()
                ),
            )?;
            let Cardinality { min, max } = slot.cardinality;
            if min == max {
                Self::write_restriction(
                    out,
                    &property,
                    &format!(
                        "<owl:cardinality rdf:datatype=\"&xsd;nonNegativeInteger\">{min}</owl:cardinality>"
                    ),
                )?;
            } else if min != 0 {
                Self::write_restriction(
                    out,
                    &property,
                    &format!(
                        "<owl:minCardinality rdf:datatype=\"&xsd;nonNegativeInteger\">{min}</owl:minCardinality>"
                    ),
                )?;
            } else if !slot.cardinality.is_unbounded() {
                Self::write_restriction(
                    out,
                    &property,
                    &format!(
                        "<owl:maxCardinality rdf:datatype=\"&xsd;nonNegativeInteger\">{max}</owl:maxCardinality>"
                    ),
                )?;
            }
        }
        writeln!(out, "    </owl:Class>")?;
        writeln!(out)?;
        Ok(())
    }

    /// `owl:oneOf` enumerations from inverse `rdf:type` attributes and
    /// `owl:unionOf` collections from inverse `rdfs:subClassOf` attributes
    fn write_collections(out: &mut String, vocab: &Vocabulary) -> Result<()> {
        for class in vocab.classes().iter().filter(|c| c.is_new) {
            let values: Vec<String> = class
                .attrs
                .iter()
                .filter(|a| a.is_inverse && a.property.qname().as_deref() == Some("rdf:type"))
                .map(|a| a.value.value_xml())
                .collect();
            if !values.is_empty() {
                writeln!(out, "    <owl:Class rdf:about=\"{}\">", class.uri.xml_entity())?;
                writeln!(out, "        <owl:oneOf rdf:parseType=\"Collection\">")?;
                for value in values {
                    writeln!(
                        out,
                        "            <rdf:Description rdf:about=\"{value}\"/>"
                    )?;
                }
                writeln!(out, "        </owl:oneOf>")?;
                writeln!(out, "    </owl:Class>")?;
                writeln!(out)?;
            }
        }
        for class in vocab.classes().iter().filter(|c| c.is_new) {
            let values: Vec<String> = class
                .attrs
                .iter()
                .filter(|a| {
                    a.is_inverse && a.property.qname().as_deref() == Some("rdfs:subClassOf")
                })
                .map(|a| a.value.value_xml())
                .collect();
            if !values.is_empty() {
                writeln!(out, "    <owl:Class rdf:about=\"{}\">", class.uri.xml_entity())?;
                writeln!(out, "        <owl:unionOf rdf:parseType=\"Collection\">")?;
                for value in values {
                    writeln!(out, "            <owl:Class rdf:about=\"{value}\"/>")?;
                }
                writeln!(out, "        </owl:unionOf>")?;
                writeln!(out, "    </owl:Class>")?;
                writeln!(out)?;
            }
        }
        Ok(())
    }

    /// Standalone descriptions for the remaining inverse attributes: the
    /// assertion is stated from the value's side
    fn write_inverse_assertions(out: &mut String, vocab: &Vocabulary) -> Result<()> {
        for class in vocab.classes().iter().filter(|c| c.is_new) {
            for attr in class.attrs.iter().filter(|a| {
                a.is_inverse
                    && a.property.qname().as_deref() != Some("rdf:type")
                    && a.property.qname().as_deref() != Some("rdfs:subClassOf")
            }) {
                writeln!(
                    out,
                    "    <rdf:Description rdf:about=\"{}\">",
                    attr.value.value_xml()
                )?;
                writeln!(
                    out,
                    "        <{} rdf:resource=\"{}\"/>",
                    property_element(&attr.property),
                    class.uri.xml_entity()
                )?;
                writeln!(out, "    </rdf:Description>")?;
                writeln!(out)?;
            }
        }
        Ok(())
    }
}

/// Element name for a property position: the qname when one is known,
/// otherwise the raw URI
fn property_element(property: &VocabUri) -> String {
    property
        .qname()
        .unwrap_or_else(|| property.uri().to_string())
}

impl Generator for OwlGenerator {
    fn name(&self) -> &'static str {
        "owl"
    }

    fn file_extension(&self) -> &'static str {
        "owl"
    }

    fn generate(&self, vocab: &Vocabulary) -> Result<String> {
        let mut out = String::new();
        Self::write_preamble(&mut out, vocab)?;
        Self::write_slot_properties(&mut out, vocab)?;
        for class in vocab.classes().iter().filter(|c| c.is_new) {
            Self::write_class(&mut out, class)?;
        }
        Self::write_collections(&mut out, vocab)?;
        Self::write_inverse_assertions(&mut out, vocab)?;
        writeln!(out, "</rdf:RDF>")?;
        writeln!(out)?;
        writeln!(out, "<!-- End of generated schema -->")?;
        Ok(out)
    }
}
