use serde_json::json;
use sniff_babel::{convert_to_json, Format};

#[test]
fn test_convert_object() {
    assert_eq!(
        convert_to_json(r#"{"foo":"bar"}"#).unwrap(),
        json!({"foo": "bar"})
    );
}

#[test]
fn test_convert_nested_document() {
    let value = convert_to_json(r#"{"a": [1, 2.5, null], "b": {"c": true}}"#).unwrap();
    assert_eq!(value["a"][1], json!(2.5));
    assert_eq!(value["b"]["c"], json!(true));
}

#[test]
fn test_convert_rejects_unquoted_keys() {
    let err = convert_to_json(r#"{foo: "bar"}"#).unwrap_err();
    assert_eq!(err.format, Format::Json);
    assert!(err.to_string().contains("Cannot convert to JSON"));
}

#[test]
fn test_convert_rejects_trailing_garbage() {
    let err = convert_to_json(r#"{"a":1} extra"#).unwrap_err();
    assert!(err.to_string().starts_with("Cannot convert to JSON: trailing characters"));
}
