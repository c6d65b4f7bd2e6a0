//! Detection tests against the public `detect_format` entry point

use proptest::prelude::*;
use sniff_babel::{detect_format, DetectionError, Detector, Format};

#[test]
fn test_detects_json_object() {
    assert_eq!(detect_format(r#"{"foo": "bar"}"#), Ok(Format::Json));
}

#[test]
fn test_detects_xml_element() {
    assert_eq!(detect_format("<root><foo>bar</foo></root>"), Ok(Format::Xml));
}

#[test]
fn test_detects_csv_by_comma() {
    assert_eq!(detect_format("name,age\nJohn,30\n"), Ok(Format::Csv));
}

#[test]
fn test_json_array_of_records_reads_as_csv() {
    assert_eq!(
        detect_format(r#"[{"name":"John"},{"name":"Jane"}]"#),
        Ok(Format::Csv)
    );
}

#[test]
fn test_empty_and_blank_payloads() {
    assert_eq!(detect_format(""), Err(DetectionError::EmptyPayload));
    assert_eq!(detect_format("   "), Err(DetectionError::EmptyPayload));
    assert_eq!(detect_format("\n\t"), Err(DetectionError::EmptyPayload));
}

#[test]
fn test_cannot_infer_message() {
    let err = detect_format("foo: bar").unwrap_err();
    assert!(err.to_string().contains("Cannot infer"));
}

#[test]
fn test_payload_ending_in_unknown_extension() {
    let err = detect_format("see the attached report.pdf").unwrap_err();
    assert_eq!(err, DetectionError::UnsupportedExtension("PDF".to_string()));
    assert_eq!(err.to_string(), "Unsupported file extension: PDF");
}

#[test]
fn test_custom_mime_sniffer() {
    let detector = Detector::new().with_mime_sniffer(|payload: &str| {
        payload
            .starts_with("---")
            .then(|| "application/yaml".parse::<mime::Mime>().expect("valid mime"))
    });

    assert_eq!(
        detector.detect("---\nfoo: bar"),
        Err(DetectionError::UnsupportedMimeType(
            "application/yaml".to_string()
        ))
    );
    assert_eq!(detector.detect("{}"), Ok(Format::Json));
}

proptest! {
    #[test]
    fn prop_object_shape_is_json(body in any::<String>()) {
        let payload = format!("{{{body}}}");
        prop_assert_eq!(detect_format(&payload), Ok(Format::Json));
    }

    #[test]
    fn prop_element_shape_is_xml(body in any::<String>()) {
        let payload = format!("<{body}>");
        prop_assert_eq!(detect_format(&payload), Ok(Format::Xml));
    }

    #[test]
    fn prop_comma_without_shape_is_csv(payload in "[a-z0-9 ]{0,12},[a-z0-9 ,\n]{0,24}[0-9]") {
        prop_assert_eq!(detect_format(&payload), Ok(Format::Csv));
    }

    #[test]
    fn prop_no_cues_cannot_infer(payload in "[a-z]{1,10}: [a-z ]{0,20}[a-z]") {
        prop_assert_eq!(detect_format(&payload), Err(DetectionError::CannotInferFormat));
    }

    #[test]
    fn prop_detection_is_idempotent(payload in any::<String>()) {
        prop_assert_eq!(detect_format(&payload), detect_format(&payload));
    }
}
