//! End-to-end tests for `format_conversion`

use serde_json::json;
use sniff_babel::{
    format_conversion, ConversionError, Converted, DetectionError, Format, FormatError,
};

#[tokio::test]
async fn test_json_payload_becomes_value() {
    let converted = format_conversion(r#"{"foo":"bar"}"#).await.unwrap();
    assert_eq!(converted, Converted::Value(json!({"foo": "bar"})));
}

#[tokio::test]
async fn test_xml_payload_is_normalized() {
    let converted = format_conversion("<root><foo>bar</foo></root>").await.unwrap();
    assert_eq!(
        converted.as_text(),
        Some("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n<root>\n  <foo>bar</foo>\n</root>")
    );
}

#[tokio::test]
async fn test_record_array_is_written_as_csv() {
    let converted = format_conversion(r#"[{"name":"John","age":30},{"name":"Jane","age":25}]"#)
        .await
        .unwrap();
    assert_eq!(
        converted,
        Converted::Text("name,age\nJohn,30\nJane,25\n".to_string())
    );
}

#[tokio::test]
async fn test_plain_csv_payload_fails_conversion() {
    let err = format_conversion("name,age\nJohn,30").await.unwrap_err();
    assert!(matches!(
        err,
        FormatError::Conversion(ConversionError {
            format: Format::Csv,
            ..
        })
    ));
}

#[tokio::test]
async fn test_detection_errors_surface() {
    assert_eq!(
        format_conversion("").await.unwrap_err(),
        FormatError::Detection(DetectionError::EmptyPayload)
    );
    assert_eq!(
        format_conversion("just words").await.unwrap_err(),
        FormatError::Detection(DetectionError::CannotInferFormat)
    );
}

#[tokio::test]
async fn test_invalid_json_object_fails_conversion() {
    let err = format_conversion("{foo: bar}").await.unwrap_err();
    assert!(err.to_string().starts_with("Cannot convert to JSON: "));
}
