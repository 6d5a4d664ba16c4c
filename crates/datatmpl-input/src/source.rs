//! Where data and template bytes come from.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::env::StdinReader;
use crate::SourceError;

/// The reserved argument meaning "read standard input".
pub const STDIN_SENTINEL: &str = "-";

/// A readable input: a named file or standard input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Read standard input until end of stream.
    Stdin,
    /// Read the named file.
    File(PathBuf),
}

impl Source {
    /// Interprets a command-line argument, mapping [`STDIN_SENTINEL`] to stdin.
    pub fn from_arg(arg: impl AsRef<Path>) -> Self {
        let path = arg.as_ref();
        if path.as_os_str() == STDIN_SENTINEL {
            Source::Stdin
        } else {
            Source::File(path.to_path_buf())
        }
    }

    pub fn is_stdin(&self) -> bool {
        matches!(self, Source::Stdin)
    }

    /// Reads the whole source into memory.
    ///
    /// Stdin is only touched for [`Source::Stdin`].
    pub fn read<R: StdinReader + ?Sized>(&self, stdin: &R) -> Result<Vec<u8>, SourceError> {
        match self {
            Source::Stdin => {
                if stdin.is_terminal() {
                    tracing::debug!("reading stdin from a terminal, end input with EOF");
                }
                let bytes = stdin.read_to_end().map_err(SourceError::Stdin)?;
                tracing::debug!(bytes = bytes.len(), "read stdin");
                Ok(bytes)
            }
            Source::File(path) => {
                let bytes = fs::read(path).map_err(|source| SourceError::File {
                    path: path.clone(),
                    source,
                })?;
                tracing::debug!(path = %path.display(), bytes = bytes.len(), "read file");
                Ok(bytes)
            }
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Stdin => f.write_str("<stdin>"),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MockStdin;
    use std::io::Write;

    #[test]
    fn sentinel_maps_to_stdin() {
        assert_eq!(Source::from_arg("-"), Source::Stdin);
        assert!(Source::from_arg("-").is_stdin());
    }

    #[test]
    fn other_args_are_files() {
        assert_eq!(
            Source::from_arg("vars.yml"),
            Source::File(PathBuf::from("vars.yml"))
        );
        // Only the bare sentinel is special.
        assert!(!Source::from_arg("./-").is_stdin());
    }

    #[test]
    fn display_names_the_source() {
        assert_eq!(Source::Stdin.to_string(), "<stdin>");
        assert_eq!(Source::from_arg("dir/vars.json").to_string(), "dir/vars.json");
    }

    #[test]
    fn read_stdin_consumes_mock() {
        let stdin = MockStdin::piped("a: 1");
        let bytes = Source::Stdin.read(&stdin).unwrap();
        assert_eq!(bytes, b"a: 1");
        assert_eq!(stdin.reads(), 1);
    }

    #[test]
    fn read_file_does_not_touch_stdin() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "name = \"x\"").unwrap();

        let stdin = MockStdin::piped("ignored");
        let bytes = Source::File(file.path().to_path_buf()).read(&stdin).unwrap();
        assert_eq!(bytes, b"name = \"x\"");
        assert_eq!(stdin.reads(), 0);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Source::from_arg("/definitely/not/here.yml")
            .read(&MockStdin::terminal())
            .unwrap_err();
        assert!(matches!(err, SourceError::File { .. }));
        assert!(err.to_string().contains("/definitely/not/here.yml"));
    }

    #[test]
    fn stdin_failure_is_reported_as_stdin() {
        let err = Source::Stdin
            .read(&MockStdin::failing(std::io::ErrorKind::Interrupted))
            .unwrap_err();
        assert!(matches!(err, SourceError::Stdin(_)));
        assert!(err.to_string().starts_with("failed to read stdin"));
    }
}
