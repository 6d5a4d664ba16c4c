//! The load → render pipeline.
//!
//! Standard input can feed only one side. Whichever side reads files is
//! loaded first, so a missing file is reported before stdin is consumed.

use std::io::Write;

use datatmpl_detect::Variables;
use datatmpl_input::{Source, StdinReader};
use datatmpl_render::TemplateSet;

use crate::config::RunConfig;
use crate::failure::{DataError, Failure};

/// Name given to a template read from stdin.
pub const STDIN_TEMPLATE: &str = "<stdin>";

/// Runs one invocation, writing the rendered output to `out`.
pub fn execute<R, W>(config: &RunConfig, stdin: &R, out: &mut W) -> Result<(), Failure>
where
    R: StdinReader + ?Sized,
    W: Write + ?Sized,
{
    if config.stdin_conflict() {
        return Err(Failure::StdinConflict);
    }

    let (variables, templates) = if config.data.is_stdin() {
        tracing::debug!("data is on stdin, loading templates first");
        let templates = load_templates(config, stdin)?;
        (load_data(config, stdin)?, templates)
    } else {
        tracing::debug!("data is a file, loading it first");
        let variables = load_data(config, stdin)?;
        (variables, load_templates(config, stdin)?)
    };

    tracing::debug!(data = ?variables, "data is");

    templates.render(&variables, &mut *out)?;
    out.flush().map_err(Failure::Output)
}

fn load_data<R: StdinReader + ?Sized>(config: &RunConfig, stdin: &R) -> Result<Variables, Failure> {
    let bytes = config.data.read(stdin).map_err(DataError::from)?;
    let detection = config
        .detector()
        .detect(&bytes, &config.data)
        .map_err(DataError::from)?;
    Ok(detection.variables)
}

fn load_templates<R: StdinReader + ?Sized>(
    config: &RunConfig,
    stdin: &R,
) -> Result<TemplateSet, Failure> {
    if config.templates.is_empty() {
        let bytes = Source::Stdin.read(stdin).map_err(Failure::StdinRead)?;
        return Ok(TemplateSet::from_bytes(STDIN_TEMPLATE, bytes, config.render)?);
    }
    Ok(TemplateSet::from_files(&config.templates, config.render)?)
}
