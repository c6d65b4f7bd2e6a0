//! Converter registry for format lookup and dispatch
//!
//! Holds one converter per [`Format`]. The dispatcher looks converters up
//! here by detected tag, so a registry missing a format makes that format
//! unsupported.

use crate::error::{DetectionError, FormatError};
use crate::format::{Converted, Converter, Format};
use crate::formats::{CsvConverter, JsonConverter, XmlConverter};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Registry of format converters
///
/// # Examples
///
/// ```ignore
/// let mut registry = ConverterRegistry::new();
/// registry.register(JsonConverter);
///
/// let converter = registry.get(Format::Json)?;
/// let value = converter.convert(r#"{"a":1}"#)?;
/// ```
#[derive(Clone)]
pub struct ConverterRegistry {
    converters: HashMap<Format, Arc<dyn Converter>>,
}

impl ConverterRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        ConverterRegistry {
            converters: HashMap::new(),
        }
    }

    /// Register a converter
    ///
    /// If a converter for the same format already exists, it will be replaced.
    pub fn register<C: Converter + 'static>(&mut self, converter: C) {
        self.converters
            .insert(converter.format(), Arc::new(converter));
    }

    /// Get the converter for a format
    pub fn get(&self, format: Format) -> Result<&Arc<dyn Converter>, DetectionError> {
        self.converters
            .get(&format)
            .ok_or_else(|| DetectionError::UnsupportedFormat(format.to_string()))
    }

    /// Check if a converter exists for a format
    pub fn has(&self, format: Format) -> bool {
        self.converters.contains_key(&format)
    }

    /// List all registered formats (sorted)
    pub fn list_formats(&self) -> Vec<Format> {
        let mut formats: Vec<_> = self.converters.keys().copied().collect();
        formats.sort();
        formats
    }

    /// Detect format from filename based on file extension
    ///
    /// Extensions are compared case-insensitively. Returns None when no
    /// registered converter claims the extension.
    pub fn detect_format_from_filename(&self, filename: &str) -> Option<Format> {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())?;

        self.converters
            .values()
            .find(|converter| {
                converter
                    .file_extensions()
                    .iter()
                    .any(|known| known.eq_ignore_ascii_case(extension))
            })
            .map(|converter| converter.format())
    }

    /// Convert a payload with the converter registered for `format`
    pub fn convert(&self, payload: &str, format: Format) -> Result<Converted, FormatError> {
        let converter = self.get(format)?;
        converter.convert(payload).map_err(FormatError::from)
    }

    /// Create a registry with default converters
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(JsonConverter);
        registry.register(CsvConverter::default());
        registry.register(XmlConverter::default());

        registry
    }
}

impl fmt::Debug for ConverterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConverterRegistry")
            .field("formats", &self.list_formats())
            .finish()
    }
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
