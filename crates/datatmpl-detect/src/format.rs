//! The supported data formats and their parsers.
//!
//! Every format is a pure `bytes -> Variables` function. The detector only
//! ever sees them through [`DataFormat::parser`], so a new format needs a
//! variant here and nothing else.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{FormatError, UnknownFormat};

/// Parsed template data: string keys mapped to arbitrary values.
pub type Variables = serde_json::Map<String, Value>;

/// A parser for one format.
pub type Parser = fn(&[u8]) -> Result<Variables, FormatError>;

/// A data serialization format the detector knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataFormat {
    /// YAML. Tried first: it accepts JSON as well.
    Yaml,
    /// JSON.
    Json,
    /// HashiCorp configuration language.
    Hcl,
    /// TOML.
    Toml,
}

impl DataFormat {
    /// Detection priority order.
    pub const DETECTION_ORDER: [DataFormat; 4] = [
        DataFormat::Yaml,
        DataFormat::Json,
        DataFormat::Hcl,
        DataFormat::Toml,
    ];

    /// Display name used in diagnostics.
    pub const fn name(&self) -> &'static str {
        match self {
            DataFormat::Yaml => "YAML",
            DataFormat::Json => "JSON",
            DataFormat::Hcl => "HCL",
            DataFormat::Toml => "TOML",
        }
    }

    pub fn parser(&self) -> Parser {
        match self {
            DataFormat::Yaml => parse_yaml,
            DataFormat::Json => parse_json,
            DataFormat::Hcl => parse_hcl,
            DataFormat::Toml => parse_toml,
        }
    }

    /// Parses `bytes` with this format only.
    pub fn parse(&self, bytes: &[u8]) -> Result<Variables, FormatError> {
        (self.parser())(bytes)
    }
}

impl fmt::Display for DataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DataFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(DataFormat::Yaml),
            "json" => Ok(DataFormat::Json),
            "hcl" => Ok(DataFormat::Hcl),
            "toml" => Ok(DataFormat::Toml),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

/// Parses YAML. A null or empty document is an empty mapping.
///
/// Only the first document of a multi-document stream is read. Merge keys
/// (`<<: *anchor`) are applied before conversion.
pub fn parse_yaml(bytes: &[u8]) -> Result<Variables, FormatError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Variables::new());
    }

    let Some(document) = serde_yaml::Deserializer::from_slice(bytes).next() else {
        return Ok(Variables::new());
    };
    let mut value = serde_yaml::Value::deserialize(document)?;
    value.apply_merge()?;

    match value {
        serde_yaml::Value::Null => Ok(Variables::new()),
        serde_yaml::Value::Mapping(mapping) => yaml_mapping(mapping),
        serde_yaml::Value::Bool(_) => Err(FormatError::NotAMapping("boolean")),
        serde_yaml::Value::Number(_) => Err(FormatError::NotAMapping("number")),
        serde_yaml::Value::String(_) => Err(FormatError::NotAMapping("string")),
        serde_yaml::Value::Sequence(_) => Err(FormatError::NotAMapping("sequence")),
        serde_yaml::Value::Tagged(_) => Err(FormatError::NotAMapping("tagged value")),
    }
}

fn yaml_mapping(mapping: serde_yaml::Mapping) -> Result<Variables, FormatError> {
    mapping
        .into_iter()
        .map(|(key, value)| Ok((yaml_key(key)?, yaml_value(value)?)))
        .collect()
}

fn yaml_key(key: serde_yaml::Value) -> Result<String, FormatError> {
    match key {
        serde_yaml::Value::String(s) => Ok(s),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        other => Err(FormatError::conversion(format_args!(
            "mapping key {other:?} is not a scalar"
        ))),
    }
}

fn yaml_value(value: serde_yaml::Value) -> Result<Value, FormatError> {
    Ok(match value {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(b),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::from(i)
            } else if let Some(u) = n.as_u64() {
                Value::from(u)
            } else {
                float(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        serde_yaml::Value::String(s) => Value::String(s),
        serde_yaml::Value::Sequence(items) => Value::Array(
            items
                .into_iter()
                .map(yaml_value)
                .collect::<Result<_, _>>()?,
        ),
        serde_yaml::Value::Mapping(mapping) => Value::Object(yaml_mapping(mapping)?),
        // Custom tags are dropped; the tagged value is kept.
        serde_yaml::Value::Tagged(tagged) => yaml_value(tagged.value)?,
    })
}

pub fn parse_json(bytes: &[u8]) -> Result<Variables, FormatError> {
    match serde_json::from_slice::<Value>(bytes)? {
        Value::Object(map) => Ok(map),
        other => Err(FormatError::NotAMapping(json_kind(&other))),
    }
}

/// Parses HCL. Blocks become nested mappings keyed by their labels.
pub fn parse_hcl(bytes: &[u8]) -> Result<Variables, FormatError> {
    let text = std::str::from_utf8(bytes)?;
    Ok(hcl::from_str::<Variables>(text)?)
}

/// Parses TOML. Datetimes become their RFC 3339 text.
pub fn parse_toml(bytes: &[u8]) -> Result<Variables, FormatError> {
    let text = std::str::from_utf8(bytes)?;
    let table: toml::Table = text.parse()?;
    Ok(toml_table(table))
}

fn toml_table(table: toml::Table) -> Variables {
    table
        .into_iter()
        .map(|(key, value)| (key, toml_value(value)))
        .collect()
}

fn toml_value(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::from(i),
        toml::Value::Float(f) => float(f),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_value).collect()),
        toml::Value::Table(table) => Value::Object(toml_table(table)),
    }
}

/// A JSON number, or the float's text when it is NaN or infinite.
fn float(f: f64) -> Value {
    serde_json::Number::from_f64(f)
        .map(Value::Number)
        .unwrap_or_else(|| Value::String(f.to_string()))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
