//! XML conversion
//!
//! Normalizes XML text: the payload is parsed with `roxmltree` (non-validating)
//! into an owned [`XmlElement`] tree, which `quick-xml` then writes back out
//! with a declaration and canonical indentation.
//!
//! ## Example
//!
//! ```text
//! <root><foo>bar</foo></root>
//! ```
//!
//! becomes
//!
//! ```text
//! <?xml version="1.0" encoding="UTF-8" standalone="yes"?>
//! <root>
//!   <foo>bar</foo>
//! </root>
//! ```
//!
//! The round trip is lossy: comments, processing instructions, the DOCTYPE and
//! whitespace-only text are dropped, and childless elements are self-closed.

pub mod parser;
pub mod serializer;
pub mod tree;

pub use tree::{XmlElement, XmlNode};

use crate::error::ConversionError;
use crate::format::{Converted, Converter, Format};

/// Knobs for the XML builder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlOptions {
    /// Spaces per nesting level
    pub indent: usize,
    /// Emit `standalone="yes"` in the declaration
    pub standalone: bool,
}

impl Default for XmlOptions {
    fn default() -> Self {
        XmlOptions {
            indent: 2,
            standalone: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct XmlConverter {
    options: XmlOptions,
}

impl XmlConverter {
    pub fn new(options: XmlOptions) -> Self {
        XmlConverter { options }
    }

    pub fn options(&self) -> &XmlOptions {
        &self.options
    }
}

impl Converter for XmlConverter {
    fn format(&self) -> Format {
        Format::Xml
    }

    fn description(&self) -> &str {
        "Parses XML and rebuilds it with canonical indentation"
    }

    fn convert(&self, payload: &str) -> Result<Converted, ConversionError> {
        normalize(payload, &self.options).map(Converted::Text)
    }
}

/// Parse XML text and rebuild it
pub fn normalize(payload: &str, options: &XmlOptions) -> Result<String, ConversionError> {
    let root = parser::parse(payload)?;
    serializer::serialize(&root, options)
}
