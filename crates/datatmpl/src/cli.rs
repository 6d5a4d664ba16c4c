//! Command-line arguments.

use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use datatmpl_detect::DataFormat;
use datatmpl_input::STDIN_SENTINEL;

use crate::config::RunConfig;

const AFTER_HELP: &str = "\
Examples:
  datatmpl -d vars.yml app.conf.tmpl > app.conf
  cat vars.yml | datatmpl app.conf.tmpl > app.conf
  cat app.conf.tmpl | datatmpl -d vars.json > app.conf
  datatmpl -d vars.toml page.tmpl macros.tmpl > page.txt

The data file may contain YAML, JSON, HCL or TOML; the parsers are tried in
that order and the first one that accepts the input wins.";

/// Substitute variables from a data file into a template.
#[derive(Debug, Parser)]
#[command(name = "datatmpl", version, about, long_about = None, after_help = AFTER_HELP)]
pub struct Cli {
    /// Template files. The first is rendered; the others can be included or
    /// imported from it by file name. Without any, the template is read from
    /// stdin.
    #[arg(value_name = "TEMPLATE")]
    pub templates: Vec<PathBuf>,

    /// YAML, JSON, HCL or TOML file with the values to substitute. Use '-' for
    /// stdin.
    #[arg(short, long, value_name = "PATH", default_value = STDIN_SENTINEL)]
    pub data: PathBuf,

    /// Parse the data with this format instead of detecting it
    /// (yaml, json, hcl or toml).
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<DataFormat>,

    /// Fail when the template references a key missing from the data.
    #[arg(long)]
    pub strict: bool,

    /// Print diagnostic messages to stderr.
    #[arg(short, long, alias = "logtostderr")]
    pub verbose: bool,
}

impl Cli {
    /// The one-line usage string, as shown in clap errors.
    pub fn usage() -> String {
        Cli::command().render_usage().to_string()
    }
}

impl From<Cli> for RunConfig {
    fn from(cli: Cli) -> Self {
        RunConfig::new(cli.data)
            .templates(cli.templates)
            .format(cli.format)
            .strict(cli.strict)
    }
}
