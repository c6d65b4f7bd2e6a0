//! JSON conversion
//!
//! Parses the payload with `serde_json` into a [`serde_json::Value`]. Object
//! key order is preserved (the workspace enables `preserve_order`), which the
//! CSV converter relies on for its column order.

use crate::error::ConversionError;
use crate::format::{Converted, Converter, Format};
use serde_json::Value;

/// Parse a payload as JSON text
pub fn parse(payload: &str) -> Result<Value, ConversionError> {
    serde_json::from_str(payload).map_err(|e| ConversionError::new(Format::Json, e.to_string()))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonConverter;

impl Converter for JsonConverter {
    fn format(&self) -> Format {
        Format::Json
    }

    fn description(&self) -> &str {
        "Parses JSON text into a structured value"
    }

    fn convert(&self, payload: &str) -> Result<Converted, ConversionError> {
        parse(payload).map(Converted::Value)
    }
}
