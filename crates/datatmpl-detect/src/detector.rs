//! First-success-wins format detection.

use std::fmt;

use crate::error::{Attempt, DetectError};
use crate::format::{DataFormat, Variables};

/// The result of a successful detection.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    /// The format that accepted the input.
    pub format: DataFormat,
    pub variables: Variables,
}

/// Tries an ordered list of formats and keeps the first that parses.
///
/// The default order is [`DataFormat::DETECTION_ORDER`]: YAML, JSON, HCL,
/// TOML. A result counts as a success even when it is empty.
///
/// ```
/// use datatmpl_detect::{DataFormat, Detector};
///
/// let detection = Detector::new().detect(b"[server]\nport = 80\n", "cfg").unwrap();
/// assert_eq!(detection.format, DataFormat::Toml);
/// assert_eq!(detection.variables["server"]["port"], 80);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detector {
    formats: Vec<DataFormat>,
}

impl Detector {
    pub fn new() -> Self {
        Self::with_formats(DataFormat::DETECTION_ORDER)
    }

    /// A detector that accepts exactly one format.
    pub fn only(format: DataFormat) -> Self {
        Self::with_formats([format])
    }

    /// A detector trying `formats` in the given order.
    pub fn with_formats(formats: impl IntoIterator<Item = DataFormat>) -> Self {
        Self {
            formats: formats.into_iter().collect(),
        }
    }

    pub fn formats(&self) -> &[DataFormat] {
        &self.formats
    }

    /// Parses `bytes` with each format in turn.
    ///
    /// `origin` names the input in the error returned when every format
    /// fails.
    pub fn detect(&self, bytes: &[u8], origin: impl fmt::Display) -> Result<Detection, DetectError> {
        let mut attempts = Vec::with_capacity(self.formats.len());

        for &format in &self.formats {
            match format.parse(bytes) {
                Ok(variables) => {
                    tracing::info!(%format, keys = variables.len(), "{format} detected");
                    return Ok(Detection { format, variables });
                }
                Err(error) => {
                    tracing::debug!(%format, %error, "{format} rejected input");
                    attempts.push(Attempt { format, error });
                }
            }
        }

        Err(DetectError {
            origin: origin.to_string(),
            attempts,
        })
    }
}

impl Default for Detector {
    fn default() -> Self {
        Self::new()
    }
}

/// Detects with the default format order.
pub fn detect(bytes: &[u8], origin: impl fmt::Display) -> Result<Detection, DetectError> {
    Detector::new().detect(bytes, origin)
}
