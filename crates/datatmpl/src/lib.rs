//! # datatmpl
//!
//! Substitute variables from a data file into a text template.
//!
//! ```text
//! datatmpl -d vars.yml app.conf.tmpl > app.conf
//! cat vars.yml | datatmpl app.conf.tmpl > app.conf
//! cat app.conf.tmpl | datatmpl -d vars.json > app.conf
//! ```
//!
//! The data file may be YAML, JSON, HCL or TOML. It is parsed by the first
//! of those formats that accepts it (see [`datatmpl_detect`]). Templates use
//! Jinja2 syntax, rendered by MiniJinja (see [`datatmpl_render`]).
//!
//! ## Execution Flow
//!
//! ```text
//! argv → Cli → RunConfig → load data / load templates → render → stdout
//! ```
//!
//! Standard input feeds either the data (`-d -`, the default) or the
//! template (no template arguments), never both. The side that reads files
//! is loaded first.
//!
//! ## Exit Codes
//!
//! See [`exit_code`]: every [`Failure`] maps to its own non-zero code.
//!
//! ## Testing
//!
//! [`run`] takes stdin, stdout and stderr as parameters, so the whole CLI
//! can be driven in-process:
//!
//! ```
//! use datatmpl::{exit_code, run};
//! use datatmpl_input::MockStdin;
//!
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let code = run(["datatmpl"], &MockStdin::piped("Name: World"), &mut out, &mut err);
//! assert_eq!(code, exit_code::USAGE);
//! ```

use std::ffi::OsString;
use std::io::Write;

use clap::error::ErrorKind;
use clap::Parser;
use datatmpl_input::StdinReader;
use tracing_subscriber::fmt::MakeWriter;

pub mod cli;
pub mod config;
mod failure;
pub mod logging;
mod pipeline;

pub use cli::Cli;
pub use config::RunConfig;
pub use failure::{exit_code, DataError, Failure};
pub use pipeline::{execute, STDIN_TEMPLATE};

/// Parses `args` and runs one invocation, returning the exit code.
///
/// Rendered output goes to `out`; usage text and diagnostics go to `err`.
/// Help and version output go to `out` and exit with success. Verbose
/// diagnostics are written to the process's stderr.
pub fn run<I, T, R, W, E>(args: I, stdin: &R, out: &mut W, err: &mut E) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    R: StdinReader + ?Sized,
    W: Write + ?Sized,
    E: Write + ?Sized,
{
    run_with_diagnostics(args, stdin, out, err, std::io::stderr)
}

/// Like [`run`], but verbose diagnostics go to `diagnostics`.
pub fn run_with_diagnostics<I, T, R, W, E, D>(
    args: I,
    stdin: &R,
    out: &mut W,
    err: &mut E,
    diagnostics: D,
) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    R: StdinReader + ?Sized,
    W: Write + ?Sized,
    E: Write + ?Sized,
    D: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    let _ = write!(out, "{}", e.render());
                    exit_code::SUCCESS
                }
                _ => {
                    let _ = write!(err, "{}", e.render());
                    exit_code::USAGE
                }
            };
        }
    };

    let verbose = cli.verbose;
    let config = RunConfig::from(cli);
    if verbose {
        tracing::subscriber::with_default(logging::subscriber(diagnostics), || {
            invoke(&config, stdin, out, err)
        })
    } else {
        invoke(&config, stdin, out, err)
    }
}

fn invoke<R, W, E>(config: &RunConfig, stdin: &R, out: &mut W, err: &mut E) -> u8
where
    R: StdinReader + ?Sized,
    W: Write + ?Sized,
    E: Write + ?Sized,
{
    match execute(config, stdin, out) {
        Ok(()) => exit_code::SUCCESS,
        Err(failure) => {
            report(&failure, err);
            failure.exit_code()
        }
    }
}

fn report<E: Write + ?Sized>(failure: &Failure, err: &mut E) {
    if let Some(engine) = failure.render_error().and_then(|e| e.engine_error()) {
        tracing::debug!("{engine:#}");
    }

    let _ = writeln!(err, "datatmpl: {failure}");
    if matches!(failure, Failure::StdinConflict) {
        let _ = writeln!(err, "\n{}\n\nFor more information, try '--help'.", Cli::usage());
    }
}
