//! Error types for template loading and rendering.
//!
//! [`RenderError`] keeps parse failures and execution failures apart. The CLI
//! reports them with different exit codes.

use std::fmt;
use std::path::PathBuf;

/// Error type for template operations.
#[derive(Debug)]
pub enum RenderError {
    /// A template file could not be read.
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Template syntax error, reported when the template is added.
    Parse(minijinja::Error),

    /// Failure while executing the primary template: undefined values in
    /// strict mode, missing include targets, or a failed write.
    Execute(minijinja::Error),

    /// A template set was requested from an empty file list.
    NoTemplates,
}

impl RenderError {
    /// `true` for failures that happen before any output is produced.
    pub fn is_parse(&self) -> bool {
        !matches!(self, RenderError::Execute(_))
    }

    /// The underlying engine error, if there is one.
    ///
    /// Its alternate display (`{:#}`) includes the offending template lines.
    pub fn engine_error(&self) -> Option<&minijinja::Error> {
        match self {
            RenderError::Parse(err) | RenderError::Execute(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Read { path, source } => {
                write!(f, "failed to read template '{}': {}", path.display(), source)
            }
            RenderError::Parse(err) => write!(f, "template parse error: {}", err),
            RenderError::Execute(err) => write!(f, "template execution error: {}", err),
            RenderError::NoTemplates => write!(f, "no template files given"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Read { source, .. } => Some(source),
            RenderError::Parse(err) | RenderError::Execute(err) => Some(err),
            RenderError::NoTemplates => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_execute_are_distinct() {
        let parse = RenderError::Parse(minijinja::Error::new(
            minijinja::ErrorKind::SyntaxError,
            "unexpected end of input",
        ));
        let exec = RenderError::Execute(minijinja::Error::new(
            minijinja::ErrorKind::UndefinedError,
            "undefined value",
        ));
        assert!(parse.is_parse());
        assert!(!exec.is_parse());
        assert!(parse.to_string().starts_with("template parse error"));
        assert!(exec.to_string().starts_with("template execution error"));
    }

    #[test]
    fn read_error_names_path() {
        let err = RenderError::Read {
            path: PathBuf::from("missing.tmpl"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.is_parse());
        assert!(err.to_string().contains("missing.tmpl"));
        assert!(err.engine_error().is_none());
    }
}
