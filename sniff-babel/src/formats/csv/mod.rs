//! CSV conversion
//!
//! Converts a JSON array of flat objects into CSV text using the `csv` crate's
//! writer. The header row comes from the first object's keys, in the order
//! they were declared; every following element is written in that column
//! order.
//!
//! ## Example
//!
//! ```text
//! [{"name":"John","age":30},{"name":"Jane","age":25}]
//! ```
//!
//! becomes
//!
//! ```text
//! name,age
//! John,30
//! Jane,25
//! ```
//!
//! Cell rendering:
//! - strings are written as-is (quoted only when they need to be)
//! - numbers and booleans use their JSON text
//! - `null` and missing keys become empty cells
//! - nested arrays and objects are written as compact JSON
//!
//! Keys that do not appear in the first object are ignored.

use crate::error::ConversionError;
use crate::format::{Converted, Converter, Format};
use crate::formats::json;
use ::csv::{Terminator, WriterBuilder};
use serde_json::{Map, Value};

/// Knobs for the CSV writer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvOptions {
    /// Field delimiter, must be a single ASCII byte
    pub delimiter: u8,
    /// Whether to emit the header row
    pub header: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        CsvOptions {
            delimiter: b',',
            header: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CsvConverter {
    options: CsvOptions,
}

impl CsvConverter {
    pub fn new(options: CsvOptions) -> Self {
        CsvConverter { options }
    }

    pub fn options(&self) -> &CsvOptions {
        &self.options
    }
}

impl Converter for CsvConverter {
    fn format(&self) -> Format {
        Format::Csv
    }

    fn description(&self) -> &str {
        "Writes a JSON array of records as CSV rows"
    }

    fn convert(&self, payload: &str) -> Result<Converted, ConversionError> {
        serialize(payload, &self.options).map(Converted::Text)
    }
}

/// Convert a JSON array of records into CSV text
pub fn serialize(payload: &str, options: &CsvOptions) -> Result<String, ConversionError> {
    let value = json::parse(payload).map_err(|e| csv_error(e.message))?;
    let records = match value {
        Value::Array(records) => records,
        other => {
            return Err(csv_error(format!(
                "expected a JSON array of records, found {}",
                kind(&other)
            )))
        }
    };

    let Some(first) = records.first() else {
        return Ok(String::new());
    };
    let columns: Vec<String> = record(first, 0)?.keys().cloned().collect();

    let mut writer = WriterBuilder::new()
        .delimiter(options.delimiter)
        .terminator(Terminator::Any(b'\n'))
        .has_headers(false)
        .from_writer(Vec::new());

    if options.header {
        writer
            .write_record(&columns)
            .map_err(|e| csv_error(e.to_string()))?;
    }

    for (index, item) in records.iter().enumerate() {
        let fields = record(item, index)?;
        let row: Vec<String> = columns
            .iter()
            .map(|column| fields.get(column).map(render_cell).unwrap_or_default())
            .collect();
        writer
            .write_record(&row)
            .map_err(|e| csv_error(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| csv_error(e.error().to_string()))?;
    String::from_utf8(bytes).map_err(|e| csv_error(e.to_string()))
}

fn record(value: &Value, index: usize) -> Result<&Map<String, Value>, ConversionError> {
    value.as_object().ok_or_else(|| {
        csv_error(format!(
            "record {index} is {}, expected an object",
            kind(value)
        ))
    })
}

fn render_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn csv_error(message: impl Into<String>) -> ConversionError {
    ConversionError::new(Format::Csv, message)
}
