//! Terminal failures and their exit codes.

use std::io;

use datatmpl_detect::DetectError;
use datatmpl_input::SourceError;
use datatmpl_render::RenderError;
use thiserror::Error;

/// Process exit codes.
pub mod exit_code {
    pub const SUCCESS: u8 = 0;
    /// Conflicting stdin requirements or invalid arguments.
    pub const USAGE: u8 = 1;
    /// Template execution or output write failed.
    pub const TEMPLATE_EXECUTE: u8 = 2;
    /// Data file unreadable, or rejected by every format.
    pub const DATA: u8 = 3;
    /// Template unreadable or syntactically invalid.
    pub const TEMPLATE_PARSE: u8 = 4;
    /// Reading the template from stdin failed.
    pub const STDIN_READ: u8 = 5;
}

/// Why the data could not be loaded.
#[derive(Debug, Error)]
pub enum DataError {
    #[error(transparent)]
    Read(#[from] SourceError),

    #[error(transparent)]
    Detect(#[from] DetectError),
}

/// A failure that ends the run.
#[derive(Debug, Error)]
pub enum Failure {
    #[error("cannot read both template and data from stdin")]
    StdinConflict,

    #[error("error reading vars data: {0}")]
    Data(#[from] DataError),

    #[error("error reading template: {0}")]
    StdinRead(#[source] SourceError),

    #[error(transparent)]
    TemplateParse(RenderError),

    #[error(transparent)]
    TemplateExecute(RenderError),

    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),
}

impl Failure {
    pub fn exit_code(&self) -> u8 {
        match self {
            Failure::StdinConflict => exit_code::USAGE,
            Failure::Data(_) => exit_code::DATA,
            Failure::StdinRead(_) => exit_code::STDIN_READ,
            Failure::TemplateParse(_) => exit_code::TEMPLATE_PARSE,
            Failure::TemplateExecute(_) | Failure::Output(_) => exit_code::TEMPLATE_EXECUTE,
        }
    }

    /// The template engine's error, for detailed diagnostics.
    pub fn render_error(&self) -> Option<&RenderError> {
        match self {
            Failure::TemplateParse(err) | Failure::TemplateExecute(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RenderError> for Failure {
    fn from(err: RenderError) -> Self {
        if err.is_parse() {
            Failure::TemplateParse(err)
        } else {
            Failure::TemplateExecute(err)
        }
    }
}
