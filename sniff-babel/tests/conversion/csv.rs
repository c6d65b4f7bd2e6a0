use crate::common::fixture;
use sniff_babel::{convert_to_csv, Format};

#[tokio::test]
async fn test_convert_records() {
    let csv = convert_to_csv(r#"[{"name":"John","age":30},{"name":"Jane","age":25}]"#)
        .await
        .unwrap();
    assert_eq!(csv, "name,age\nJohn,30\nJane,25\n");
}

#[tokio::test]
async fn test_convert_fixture() {
    let csv = convert_to_csv(&fixture("people.json")).await.unwrap();
    assert_eq!(
        csv,
        "name,age,email,tags\n\
         John,30,john@example.com,\"[\"\"admin\"\",\"\"ops\"\"]\"\n\
         Jane,25,,\n\
         \"O'Brien, Pat\",41,pat@example.com,\n"
    );
}

#[tokio::test]
async fn test_convert_rejects_csv_text() {
    let err = convert_to_csv("foo,bar\n1,2\n3").await.unwrap_err();
    assert_eq!(err.format, Format::Csv);
    assert!(err.to_string().contains("Cannot convert to CSV"));
}

#[tokio::test]
async fn test_convert_rejects_scalar_records() {
    let err = convert_to_csv("[1, 2, 3]").await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Cannot convert to CSV: record 0 is a number, expected an object"
    );
}
