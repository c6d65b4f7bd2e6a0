//! Detection plus dispatch
//!
//! A [`Pipeline`] pairs a [`Detector`] with a [`ConverterRegistry`]: the
//! detector names the format, the registry supplies the converter, and the
//! conversion runs as a single-shot async task.

use crate::detect::Detector;
use crate::error::{DetectionError, FormatError};
use crate::format::{Converted, Format};
use crate::registry::ConverterRegistry;
use crate::task::single_shot;

#[derive(Debug, Default)]
pub struct Pipeline {
    detector: Detector,
    registry: ConverterRegistry,
}

impl Pipeline {
    pub fn new(detector: Detector, registry: ConverterRegistry) -> Self {
        Pipeline { detector, registry }
    }

    pub fn detector(&self) -> &Detector {
        &self.detector
    }

    pub fn registry(&self) -> &ConverterRegistry {
        &self.registry
    }

    /// Detect the payload's format
    pub fn detect(&self, payload: &str) -> Result<Format, DetectionError> {
        self.detector.detect(payload)
    }

    /// Detect the payload's format and run the matching converter
    pub async fn convert(&self, payload: &str) -> Result<Converted, FormatError> {
        let format = self.detector.detect(payload)?;
        self.convert_as(payload, format).await
    }

    /// Run the converter for `format` without detection
    pub async fn convert_as(&self, payload: &str, format: Format) -> Result<Converted, FormatError> {
        let converter = self.registry.get(format)?.clone();
        let payload = payload.to_owned();
        let converted = single_shot(format, move || converter.convert(&payload)).await?;
        Ok(converted)
    }
}
