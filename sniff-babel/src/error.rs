//! Error types for detection and conversion

use crate::format::Format;
use thiserror::Error;

/// Errors raised while deciding which format a payload is in
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DetectionError {
    /// Trailing `.ext` token that is not one of the known formats
    #[error("Unsupported file extension: {0}")]
    UnsupportedExtension(String),
    /// A MIME sniffer resolved a type outside the known mapping
    #[error("Unsupported MIME type: {0}")]
    UnsupportedMimeType(String),
    /// Empty or whitespace-only payload
    #[error("Cannot infer format from empty data")]
    EmptyPayload,
    /// Content sniffing ran out of structural cues
    #[error("Cannot infer format from data")]
    CannotInferFormat,
    /// Format name unknown, or no converter registered for it
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Failure of the library doing the actual parsing or serialization.
///
/// The message is the underlying library's error text, prefixed with the
/// format the payload was being converted to.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Cannot convert to {format}: {message}")]
pub struct ConversionError {
    pub format: Format,
    pub message: String,
}

impl ConversionError {
    pub fn new(format: Format, message: impl Into<String>) -> Self {
        ConversionError {
            format,
            message: message.into(),
        }
    }
}

/// Anything [`crate::format_conversion`] can fail with
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error(transparent)]
    Detection(#[from] DetectionError),
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}
