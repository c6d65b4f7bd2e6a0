//! Shared configuration loader for sniff-babel.
//!
//! `defaults/sniff.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`SniffConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use sniff_babel::formats::{CsvConverter, JsonConverter, XmlConverter};
use sniff_babel::{ConverterRegistry, CsvOptions, Detector, Pipeline, XmlOptions};
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/sniff.default.toml");

/// Top-level configuration consumed by sniff applications.
#[derive(Debug, Clone, Deserialize)]
pub struct SniffConfig {
    pub detection: DetectionConfig,
    pub convert: ConvertConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DetectionConfig {
    pub extension_sniff: bool,
}

/// Format-specific conversion knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub csv: CsvConfig,
    pub xml: XmlConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CsvConfig {
    pub delimiter: char,
    pub header: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct XmlConfig {
    pub indent: usize,
    pub standalone: bool,
}

impl TryFrom<&CsvConfig> for CsvOptions {
    type Error = ConfigError;

    fn try_from(config: &CsvConfig) -> Result<Self, Self::Error> {
        if !config.delimiter.is_ascii() {
            return Err(ConfigError::Message(format!(
                "convert.csv.delimiter must be a single ASCII character, got '{}'",
                config.delimiter
            )));
        }
        Ok(CsvOptions {
            delimiter: config.delimiter as u8,
            header: config.header,
        })
    }
}

impl From<&XmlConfig> for XmlOptions {
    fn from(config: &XmlConfig) -> Self {
        XmlOptions {
            indent: config.indent,
            standalone: config.standalone,
        }
    }
}

impl SniffConfig {
    /// Detector honoring the `[detection]` settings
    pub fn detector(&self) -> Detector {
        Detector::new().with_extension_sniff(self.detection.extension_sniff)
    }

    /// Registry of the default converters built with the `[convert]` settings
    pub fn registry(&self) -> Result<ConverterRegistry, ConfigError> {
        let mut registry = ConverterRegistry::new();
        registry.register(JsonConverter);
        registry.register(CsvConverter::new(CsvOptions::try_from(&self.convert.csv)?));
        registry.register(XmlConverter::new(XmlOptions::from(&self.convert.xml)));
        Ok(registry)
    }

    /// Detector and registry combined
    pub fn pipeline(&self) -> Result<Pipeline, ConfigError> {
        Ok(Pipeline::new(self.detector(), self.registry()?))
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder, deserialize and validate the resulting configuration.
    pub fn build(self) -> Result<SniffConfig, ConfigError> {
        let config: SniffConfig = self.builder.build()?.try_deserialize()?;
        CsvOptions::try_from(&config.convert.csv)?;
        Ok(config)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<SniffConfig, ConfigError> {
    Loader::new().build()
}
