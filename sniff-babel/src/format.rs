//! Format tag and Converter trait definition
//!
//! [`Format`] names the three serializations this crate understands. The
//! [`Converter`] trait is the uniform interface every format adapter implements,
//! so the dispatcher can hand a payload to whichever adapter matches the
//! detected tag.

use crate::error::{ConversionError, DetectionError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The serialization formats a payload can be detected as
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Format {
    Json,
    Csv,
    Xml,
}

impl Format {
    /// All known formats, in detection tie-break order
    pub const ALL: [Format; 3] = [Format::Json, Format::Csv, Format::Xml];

    /// Upper-case name, as used in error messages
    pub fn name(self) -> &'static str {
        match self {
            Format::Json => "JSON",
            Format::Csv => "CSV",
            Format::Xml => "XML",
        }
    }

    /// Canonical MIME type
    pub fn mime_type(self) -> &'static str {
        match self {
            Format::Json => "application/json",
            Format::Csv => "text/csv",
            Format::Xml => "application/xml",
        }
    }

    /// File extensions without the leading dot
    pub fn file_extensions(self) -> &'static [&'static str] {
        match self {
            Format::Json => &["json"],
            Format::Csv => &["csv"],
            Format::Xml => &["xml"],
        }
    }

    /// Map a MIME essence (`type/subtype`, no parameters) to a format
    pub fn from_mime_essence(essence: &str) -> Option<Format> {
        Format::ALL
            .into_iter()
            .find(|format| format.mime_type().eq_ignore_ascii_case(essence))
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = DetectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "JSON" => Ok(Format::Json),
            "CSV" => Ok(Format::Csv),
            "XML" => Ok(Format::Xml),
            _ => Err(DetectionError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Output of a conversion
#[derive(Debug, Clone, PartialEq)]
pub enum Converted {
    /// Structured value (JSON conversion)
    Value(serde_json::Value),
    /// Serialized text (CSV, XML)
    Text(String),
}

impl Converted {
    /// Borrow the text output, if this is a textual conversion
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Converted::Text(text) => Some(text),
            Converted::Value(_) => None,
        }
    }

    /// Render the output as text; structured values are printed as compact JSON.
    pub fn into_text(self) -> String {
        match self {
            Converted::Text(text) => text,
            Converted::Value(value) => value.to_string(),
        }
    }
}

/// Trait for format adapters
///
/// Implementors never parse or serialize by hand; they wrap the ecosystem
/// library for their format and map its errors into [`ConversionError`].
///
/// # Examples
///
/// ```ignore
/// struct Upper;
///
/// impl Converter for Upper {
///     fn format(&self) -> Format {
///         Format::Csv
///     }
///
///     fn convert(&self, payload: &str) -> Result<Converted, ConversionError> {
///         Ok(Converted::Text(payload.to_uppercase()))
///     }
/// }
/// ```
pub trait Converter: Send + Sync {
    /// The format this converter produces
    fn format(&self) -> Format;

    /// Optional description of this converter
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this converter's format
    ///
    /// Used by [`crate::ConverterRegistry::detect_format_from_filename`].
    fn file_extensions(&self) -> &[&str] {
        self.format().file_extensions()
    }

    /// Convert the payload
    fn convert(&self, payload: &str) -> Result<Converted, ConversionError>;
}
