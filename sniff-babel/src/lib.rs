//! Payload format sniffing and conversion
//!
//!     This crate decides whether an opaque text payload is JSON, CSV or XML and hands it to a
//!     converter for that format.
//!
//!     TLDR:
//!         - Babel never parses or serializes any format by hand, it relies on the format's crate
//!           (serde_json, csv, roxmltree + quick-xml)
//!         - Detection is a short ordered list of sniff strategies, the first one to decide wins
//!         - Converters implement the Converter trait and live in a registry keyed by format
//!
//! Architecture
//!
//!     .
//!     ├── error.rs                # DetectionError, ConversionError, FormatError
//!     ├── format.rs               # Format tag and Converter trait
//!     ├── detect.rs               # Ordered sniff strategies and the MIME hook
//!     ├── registry.rs             # ConverterRegistry for lookup and selection
//!     ├── pipeline.rs             # Detector + registry, async dispatch
//!     ├── task.rs                 # single-shot blocking task runner
//!     └── formats
//!         ├── json                # JSON text → serde_json::Value
//!         ├── csv                 # JSON array of records → CSV text
//!         └── xml                 # XML text → element tree → canonical XML text
//!
//! Detection
//!
//!     Three strategies run in order: a trailing `.ext` token on the payload, the pluggable MIME
//!     sniffer (which resolves nothing unless one is installed), then structural cues in the
//!     content. See ./detect.rs for the exact rules and their precedence.
//!
//! Conversions
//!
//!     The CSV converter takes JSON as input: a payload detected as CSV is still expected to be a
//!     JSON array of records. XML conversion is a normalizing round trip, not byte preserving.
//!
//!     CSV and XML conversions are async. They run on Tokio's blocking pool, so callers need a
//!     Tokio runtime.
//!
pub mod detect;
pub mod error;
pub mod format;
pub mod formats;
pub mod pipeline;
pub mod registry;

mod task;

pub use detect::{Detector, MimeSniffer, NoMimeSniffer};
pub use error::{ConversionError, DetectionError, FormatError};
pub use format::{Converted, Converter, Format};
pub use formats::{CsvOptions, XmlOptions};
pub use pipeline::Pipeline;
pub use registry::ConverterRegistry;

use once_cell::sync::Lazy;
use serde_json::Value;

static DEFAULT_PIPELINE: Lazy<Pipeline> = Lazy::new(Pipeline::default);

/// Detect the format of a payload with the default detector.
pub fn detect_format(payload: &str) -> Result<Format, DetectionError> {
    DEFAULT_PIPELINE.detect(payload)
}

/// Parse a payload as JSON.
pub fn convert_to_json(payload: &str) -> Result<Value, ConversionError> {
    formats::json::parse(payload)
}

/// Convert a JSON array of records into CSV text.
pub async fn convert_to_csv(payload: &str) -> Result<String, ConversionError> {
    let payload = payload.to_owned();
    task::single_shot(Format::Csv, move || {
        formats::csv::serialize(&payload, &CsvOptions::default())
    })
    .await
}

/// Parse XML text and rebuild it with the canonical declaration and indentation.
pub async fn convert_to_xml(payload: &str) -> Result<String, ConversionError> {
    let payload = payload.to_owned();
    task::single_shot(Format::Xml, move || {
        formats::xml::normalize(&payload, &XmlOptions::default())
    })
    .await
}

/// Detect the payload's format and convert it with the default converters.
pub async fn format_conversion(payload: &str) -> Result<Converted, FormatError> {
    DEFAULT_PIPELINE.convert(payload).await
}
