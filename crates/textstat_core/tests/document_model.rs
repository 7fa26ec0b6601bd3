use std::path::Path;
use textstat_core::Document;

#[test]
fn from_content_has_no_source_path() {
    let doc = Document::from_content("hello");

    assert_eq!(doc.content(), "hello");
    assert_eq!(doc.source(), None);
    assert!(!doc.is_empty());
}

#[test]
fn with_source_records_origin_verbatim() {
    let doc = Document::with_source("/data/stanford.txt", "hello");

    assert_eq!(doc.source(), Some(Path::new("/data/stanford.txt")));
    assert_eq!(doc.content(), "hello");
}

#[test]
fn empty_content_is_reported_as_empty() {
    assert!(Document::from_content("").is_empty());
}

#[test]
fn from_impls_build_sourceless_documents() {
    let from_str: Document = "abc".into();
    let from_string: Document = String::from("abc").into();

    assert_eq!(from_str, from_string);
    assert_eq!(from_str.source(), None);
}

#[test]
fn document_serialization_round_trips() {
    let doc = Document::with_source("/data/stanford.txt", "line1\nline2");

    let json = serde_json::to_value(&doc).unwrap();
    assert_eq!(json["source"], "/data/stanford.txt");
    assert_eq!(json["content"], "line1\nline2");

    let decoded: Document = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, doc);
}
