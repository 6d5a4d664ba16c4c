//! Data format auto-detection for datatmpl.
//!
//! A data file handed to datatmpl may be YAML, JSON, HCL or TOML. Nothing
//! declares which: [`Detector`] tries each parser in priority order and keeps
//! the first result that parses into a key-value mapping.
//!
//! ```
//! use datatmpl_detect::{detect, DataFormat};
//!
//! let detection = detect(b"name: World", "vars.yml").unwrap();
//! assert_eq!(detection.format, DataFormat::Yaml);
//! assert_eq!(detection.variables["name"], "World");
//! ```
//!
//! Parsed values are normalized to [`serde_json::Value`], whatever the
//! source format, so the renderer has one data model to deal with.

mod detector;
mod error;
mod format;

pub use detector::{detect, Detection, Detector};
pub use error::{Attempt, DetectError, FormatError, UnknownFormat};
pub use format::{parse_hcl, parse_json, parse_toml, parse_yaml, DataFormat, Parser, Variables};
