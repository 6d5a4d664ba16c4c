//! Input sources for datatmpl.
//!
//! Data files and templates are read either from a named file or, when the
//! argument is the `-` sentinel, from standard input until end of stream.
//!
//! ```
//! use datatmpl_input::{MockStdin, Source};
//!
//! let stdin = MockStdin::piped("name: World");
//! let bytes = Source::from_arg("-").read(&stdin).unwrap();
//! assert_eq!(bytes, b"name: World");
//! ```
//!
//! Standard input can only be consumed once per process. Callers decide up
//! front which side (data or template) owns it; [`Source::is_stdin`] is the
//! check they use.

pub mod env;
mod error;
mod source;

pub use env::{MockStdin, RealStdin, StdinReader};
pub use error::SourceError;
pub use source::{Source, STDIN_SENTINEL};
