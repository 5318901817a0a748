//! Rendering tests over a parsed vocabulary, covering all three output
//! formats from the same source sheet.

use vocabsheet::generator::{Generator, MediaWikiGenerator, OwlGenerator, TextileGenerator};
use vocabsheet::loader::CsvVocabLoader;
use vocabsheet_core::prelude::*;

const VOCAB_CSV: &str = r#""f","Class","Property","Value","Label","Description","Comment"
"@","prefix","pre:","<http://example.org/vocab#>",,,
"@","prefix","rdf:","<http://www.w3.org/1999/02/22-rdf-syntax-ns#>",,,
"@","prefix","rdfs:","<http://www.w3.org/2000/01/rdf-schema#>",,,
"@","prefix","xsd:","<http://www.w3.org/2001/XMLSchema#>",,,
,,,,,,
"+","pre:Person",,,"Person","A person known to the system",
"+",,"pre:name","1 :: xsd:string","name","Full name",
"+",,"pre:knows","* :: pre:Person","knows","Acquaintances",
"+",,,"<= rdfs:seeAlso",,,
"+",,"rdfs:label","""A person""",,,
,,,,,,
"+","pre:Status",,,"Status",,
"+",,"^ rdf:type","pre:active",,,
"+",,,"pre:retired",,,
"#
;

fn load() -> Vocabulary {
    CsvVocabLoader::new()
        .load_reader(VOCAB_CSV.as_bytes())
        .expect("fixture parses")
}

#[test]
fn test_owl_output_structure() {
    let owl = OwlGenerator::new().generate(&load()).unwrap();
    assert!(owl.starts_with("<?xml version=\"1.0\"?>"));
    assert!(owl.contains("<!ENTITY pre \"http://example.org/vocab#\" >"));
    assert!(owl.contains("xmlns:xsd=\"http://www.w3.org/2001/XMLSchema#\""));
    assert!(owl.contains("<owl:DatatypeProperty rdf:about=\"&pre;name\">"));
    assert!(owl.contains("<owl:ObjectProperty rdf:about=\"&pre;knows\">"));
    assert!(owl.contains("<owl:Class rdf:about=\"&pre;Person\">"));
    assert!(owl.contains("<rdfs:label>Person</rdfs:label>"));
    assert!(owl.contains("<owl:allValuesFrom rdf:resource=\"&xsd;string\"/>"));
    assert!(owl.contains(
        "<owl:cardinality rdf:datatype=\"&xsd;nonNegativeInteger\">1</owl:cardinality>"
    ));
    assert!(owl.trim_end().ends_with("-->"));
}

#[test]
fn test_owl_literal_attr_sheds_quotes() {
    let owl = OwlGenerator::new().generate(&load()).unwrap();
    assert!(owl.contains("<rdfs:label>A person</rdfs:label>"));
}

#[test]
fn test_owl_enumeration_from_inverse_type_attrs() {
    let owl = OwlGenerator::new().generate(&load()).unwrap();
    assert!(owl.contains("<owl:Class rdf:about=\"&pre;Status\">"));
    assert!(owl.contains("<owl:oneOf rdf:parseType=\"Collection\">"));
    assert!(owl.contains("<rdf:Description rdf:about=\"&pre;active\"/>"));
    assert!(owl.contains("<rdf:Description rdf:about=\"&pre;retired\"/>"));
}

#[test]
fn test_owl_rejects_inverse_slot() {
    let csv = "\"f\",\"c\",\"p\",\"v\",\"l\",\"d\",\"m\"\n\
               \"@\",\"prefix\",\"pre:\",\"<http://example.org/vocab#>\",,,\n\
               \"+\",\"pre:Thing\",,,,,\n\
               \"+\",,\"^ pre:partOf\",\"* :: pre:Thing\",,,\n";
    let vocab = CsvVocabLoader::new().load_reader(csv.as_bytes()).unwrap();
    // the model itself accepts the inverse slot
    assert!(vocab.classes()[0].slots[0].is_inverse);
    let err = OwlGenerator::new().generate(&vocab).unwrap_err();
    assert!(matches!(err, VocabError::UnsupportedInverseSlot { .. }));
    // the table formats still render it
    assert!(MediaWikiGenerator::new().generate(&vocab).is_ok());
    assert!(TextileGenerator::new().generate(&vocab).is_ok());
}

#[test]
fn test_mediawiki_output_structure() {
    let wiki = MediaWikiGenerator::new().generate(&load()).unwrap();
    assert!(wiki.starts_with("== Vocabulary summary ==\n"));
    assert!(wiki.contains("! Class !! Property !! Value !! Label !! Description"));
    assert!(wiki.contains("| @prefix ||pre:||colspan=\"3\"|<http://example.org/vocab#>"));
    assert!(wiki.contains("|pre:Person||||||Person||A person known to the system"));
    assert!(wiki.contains("|||pre:name||1 :: xsd:string||name||Full name"));
    assert!(wiki.contains("|||||<= rdfs:seeAlso||||"));
    assert!(wiki.contains("|||^ rdf:type||pre:active||||"));
    assert!(wiki.trim_end().ends_with("|}"));
}

#[test]
fn test_textile_output_structure() {
    let textile = TextileGenerator::new().generate(&load()).unwrap();
    assert!(textile.starts_with("<h2>Vocabulary summary</h2>\n"));
    assert!(textile.contains("<td>@prefix</td><td>pre:</td>"));
    assert!(textile.contains("&lt;http://example.org/vocab#&gt;"));
    assert!(textile.contains("<td colspan=\"3\" valign=\"top\">pre:Person</td>"));
    assert!(textile.contains("<td valign=\"top\">&#42; :: pre:Person</td>"));
    assert!(textile.contains("<td valign=\"top\">&#94; rdf:type</td>"));
    assert!(textile.trim_end().ends_with("</table>"));
}

#[test]
fn test_generator_metadata() {
    assert_eq!(OwlGenerator::new().name(), "owl");
    assert_eq!(OwlGenerator::new().file_extension(), "owl");
    assert_eq!(MediaWikiGenerator::new().name(), "mediawiki");
    assert_eq!(MediaWikiGenerator::new().file_extension(), "wiki");
    assert_eq!(TextileGenerator::new().name(), "textile");
    assert_eq!(TextileGenerator::new().file_extension(), "textile");
}
