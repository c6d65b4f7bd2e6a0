use crate::common::fixture;
use insta::assert_snapshot;
use sniff_babel::{convert_to_xml, Format};

#[tokio::test]
async fn test_convert_simple_document() {
    let xml = convert_to_xml("<root><foo>bar</foo></root>").await.unwrap();
    assert_eq!(
        xml,
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n<root>\n  <foo>bar</foo>\n</root>"
    );
}

#[tokio::test]
async fn test_convert_is_stable_on_its_own_output() {
    let once = convert_to_xml("<a><b><c>1</c></b><d/></a>").await.unwrap();
    let twice = convert_to_xml(&once).await.unwrap();
    assert_eq!(once, twice);
}

#[tokio::test]
async fn test_convert_fixture() {
    let xml = convert_to_xml(&fixture("catalog.xml")).await.unwrap();
    assert_snapshot!(xml, @r#"
    <?xml version="1.0" encoding="UTF-8" standalone="yes"?>
    <catalog xmlns:dc="http://purl.org/dc/elements/1.1/">
      <book id="bk101" available="true">
        <dc:title>Rust in Action</dc:title>
        <price currency="EUR">39.99</price>
        <tags/>
      </book>
      <book id="bk102">
        <dc:title>Fish &amp; Chips</dc:title>
      </book>
    </catalog>
    "#);
}

#[tokio::test]
async fn test_convert_rejects_mismatched_tags() {
    let err = convert_to_xml("<root><foo>bar</bar></root>").await.unwrap_err();
    assert_eq!(err.format, Format::Xml);
    assert!(err.to_string().contains("Cannot convert to XML"));
}

#[tokio::test]
async fn test_convert_rejects_non_xml() {
    let err = convert_to_xml("name,age\nJohn,30").await.unwrap_err();
    assert!(err.to_string().starts_with("Cannot convert to XML: "));
}
