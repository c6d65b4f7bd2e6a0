//! Format implementations
//!
//! Each format wraps the ecosystem crate that does the real work and adapts
//! its errors to [`crate::ConversionError`].

pub mod csv;
pub mod json;
pub mod xml;

pub use self::csv::{CsvConverter, CsvOptions};
pub use self::json::JsonConverter;
pub use self::xml::{XmlConverter, XmlOptions};
