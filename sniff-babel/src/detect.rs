//! Payload format detection
//!
//! Detection runs three sniff strategies in a fixed order and stops at the
//! first one that recognizes the payload:
//!
//! 1. extension: a trailing `.ext` token at the very end of the payload text
//! 2. MIME: whatever the configured [`MimeSniffer`] resolves
//! 3. content: structural cues (`{...}`, `<...>`, a comma anywhere)
//!
//! A strategy either passes (`Ok(None)`), decides (`Ok(Some(format))`) or
//! rejects the payload outright (`Err`). Rejections are terminal; there is no
//! fallback to the next strategy once one has failed.
//!
//! The extension strategy inspects the payload body, not a filename, so in
//! practice it only fires on payloads that happen to end in something like
//! `.json`. It can be switched off with [`Detector::with_extension_sniff`], and
//! [`Detector::detect_with_filename`] applies it to a real filename instead.

use crate::error::DetectionError;
use crate::format::Format;
use mime::Mime;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use tracing::{debug, trace};

static TRAILING_EXTENSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.([a-zA-Z]+)$").expect("static regex"));

/// Hook for resolving a MIME type from a payload.
///
/// Any `Fn(&str) -> Option<Mime>` closure is a sniffer.
pub trait MimeSniffer: Send + Sync {
    fn sniff(&self, payload: &str) -> Option<Mime>;
}

impl<F> MimeSniffer for F
where
    F: Fn(&str) -> Option<Mime> + Send + Sync,
{
    fn sniff(&self, payload: &str) -> Option<Mime> {
        self(payload)
    }
}

/// Sniffer that never resolves a MIME type
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMimeSniffer;

impl MimeSniffer for NoMimeSniffer {
    fn sniff(&self, _payload: &str) -> Option<Mime> {
        None
    }
}

type Strategy = fn(&Detector, &str) -> Result<Option<Format>, DetectionError>;

const STRATEGIES: [(&str, Strategy); 3] = [
    ("extension", Detector::sniff_extension),
    ("mime", Detector::sniff_mime),
    ("content", Detector::sniff_content),
];

/// Ordered-strategy format detector
pub struct Detector {
    mime_sniffer: Box<dyn MimeSniffer>,
    extension_sniff: bool,
}

impl Detector {
    /// Detector with no MIME sniffing and the extension strategy enabled
    pub fn new() -> Self {
        Detector {
            mime_sniffer: Box::new(NoMimeSniffer),
            extension_sniff: true,
        }
    }

    /// Replace the MIME sniffing hook
    pub fn with_mime_sniffer<S: MimeSniffer + 'static>(mut self, sniffer: S) -> Self {
        self.mime_sniffer = Box::new(sniffer);
        self
    }

    /// Enable or disable the trailing-extension strategy
    pub fn with_extension_sniff(mut self, enabled: bool) -> Self {
        self.extension_sniff = enabled;
        self
    }

    pub fn extension_sniff(&self) -> bool {
        self.extension_sniff
    }

    /// Detect the format of a payload
    pub fn detect(&self, payload: &str) -> Result<Format, DetectionError> {
        self.run(&STRATEGIES, payload)
    }

    /// Detect using the extension of `filename`, falling back to the MIME and
    /// content strategies on the payload when the filename has no extension.
    pub fn detect_with_filename(
        &self,
        payload: &str,
        filename: &str,
    ) -> Result<Format, DetectionError> {
        if let Some(format) = extension_format(filename)? {
            debug!(strategy = "filename", %format, "format detected");
            return Ok(format);
        }
        self.run(&STRATEGIES[1..], payload)
    }

    fn run(
        &self,
        strategies: &[(&str, Strategy)],
        payload: &str,
    ) -> Result<Format, DetectionError> {
        for (name, strategy) in strategies {
            match strategy(self, payload)? {
                Some(format) => {
                    debug!(strategy = *name, %format, "format detected");
                    return Ok(format);
                }
                None => trace!(strategy = *name, "strategy passed"),
            }
        }
        Err(DetectionError::CannotInferFormat)
    }

    fn sniff_extension(&self, payload: &str) -> Result<Option<Format>, DetectionError> {
        if !self.extension_sniff {
            return Ok(None);
        }
        extension_format(payload)
    }

    fn sniff_mime(&self, payload: &str) -> Result<Option<Format>, DetectionError> {
        let Some(mime) = self.mime_sniffer.sniff(payload) else {
            return Ok(None);
        };
        Format::from_mime_essence(mime.essence_str())
            .map(Some)
            .ok_or_else(|| DetectionError::UnsupportedMimeType(mime.essence_str().to_string()))
    }

    fn sniff_content(&self, payload: &str) -> Result<Option<Format>, DetectionError> {
        let trimmed = payload.trim();
        if trimmed.is_empty() {
            return Err(DetectionError::EmptyPayload);
        }

        if trimmed.starts_with('{') && trimmed.ends_with('}') {
            Ok(Some(Format::Json))
        } else if trimmed.starts_with('<') && trimmed.ends_with('>') {
            Ok(Some(Format::Xml))
        } else if trimmed.contains(',') {
            Ok(Some(Format::Csv))
        } else {
            Err(DetectionError::CannotInferFormat)
        }
    }
}

impl Default for Detector {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Detector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Detector")
            .field("extension_sniff", &self.extension_sniff)
            .finish_non_exhaustive()
    }
}

/// Format named by a trailing `.ext` token, if there is one
fn extension_format(text: &str) -> Result<Option<Format>, DetectionError> {
    let Some(captures) = TRAILING_EXTENSION.captures(text) else {
        return Ok(None);
    };
    let token = captures[1].to_ascii_uppercase();
    token
        .parse::<Format>()
        .map(Some)
        .map_err(|_| DetectionError::UnsupportedExtension(token))
}
