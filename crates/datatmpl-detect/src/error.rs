//! Error types for format parsing and detection.

use thiserror::Error;

use crate::format::DataFormat;

/// Why a single format rejected the input.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HCL: {0}")]
    Hcl(#[from] hcl::Error),

    #[error("TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("input is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// The document parsed, but its top level is not a key-value mapping.
    #[error("top-level {0} is not a mapping")]
    NotAMapping(&'static str),

    /// The parsed value could not be represented as template variables.
    #[error("unsupported value: {0}")]
    Conversion(String),
}

impl FormatError {
    pub(crate) fn conversion(err: impl std::fmt::Display) -> Self {
        Self::Conversion(err.to_string())
    }
}

/// One failed parse attempt during detection.
#[derive(Debug)]
pub struct Attempt {
    pub format: DataFormat,
    pub error: FormatError,
}

/// Detection failed: no format accepted the input.
#[derive(Debug, Error)]
#[error("data in '{origin}' failed to parse as {}", format_list(.attempts))]
pub struct DetectError {
    /// Name of the data source, e.g. a path or `<stdin>`.
    pub origin: String,
    /// Every attempt, in the order it was made.
    pub attempts: Vec<Attempt>,
}

impl DetectError {
    /// Formats that were tried, in order.
    pub fn formats(&self) -> impl Iterator<Item = DataFormat> + '_ {
        self.attempts.iter().map(|attempt| attempt.format)
    }
}

/// A format name that doesn't match any [`DataFormat`].
#[derive(Debug, Error)]
#[error("unknown data format '{0}' (expected yaml, json, hcl or toml)")]
pub struct UnknownFormat(pub String);

fn format_list(attempts: &[Attempt]) -> String {
    let names: Vec<&str> = attempts.iter().map(|a| a.format.name()).collect();
    match names.split_last() {
        None => "any format".to_string(),
        Some((only, [])) => (*only).to_string(),
        Some((last, rest)) => format!("{} or {}", rest.join(", "), last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attempt(format: DataFormat) -> Attempt {
        Attempt {
            format,
            error: FormatError::NotAMapping("string"),
        }
    }

    #[test]
    fn message_lists_all_formats() {
        let err = DetectError {
            origin: "vars.txt".into(),
            attempts: DataFormat::DETECTION_ORDER.into_iter().map(attempt).collect(),
        };
        assert_eq!(
            err.to_string(),
            "data in 'vars.txt' failed to parse as YAML, JSON, HCL or TOML"
        );
    }

    #[test]
    fn message_with_single_format() {
        let err = DetectError {
            origin: "<stdin>".into(),
            attempts: vec![attempt(DataFormat::Toml)],
        };
        assert_eq!(err.to_string(), "data in '<stdin>' failed to parse as TOML");
    }

    #[test]
    fn message_with_two_formats() {
        let err = DetectError {
            origin: "x".into(),
            attempts: vec![attempt(DataFormat::Hcl), attempt(DataFormat::Toml)],
        };
        assert_eq!(err.to_string(), "data in 'x' failed to parse as HCL or TOML");
    }

    #[test]
    fn unknown_format_message() {
        let err = UnknownFormat("ini".into());
        assert!(err.to_string().contains("'ini'"));
    }
}
