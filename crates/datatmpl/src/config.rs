//! Run configuration.
//!
//! [`RunConfig`] is everything one invocation needs, independent of argv.

use std::path::PathBuf;

use datatmpl_detect::{DataFormat, Detector};
use datatmpl_input::Source;
use datatmpl_render::{MissingKeys, RenderOptions};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Where the data comes from.
    pub data: Source,
    /// Template files; empty means the template is read from stdin.
    pub templates: Vec<PathBuf>,
    /// Forced data format, skipping detection.
    pub format: Option<DataFormat>,
    pub render: RenderOptions,
}

impl RunConfig {
    /// A config reading data from `data` (`-` for stdin) and the template
    /// from stdin.
    pub fn new(data: impl Into<PathBuf>) -> Self {
        let data: PathBuf = data.into();
        Self {
            data: Source::from_arg(data),
            templates: Vec::new(),
            format: None,
            render: RenderOptions::default(),
        }
    }

    pub fn templates(mut self, templates: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        self.templates = templates.into_iter().map(Into::into).collect();
        self
    }

    pub fn format(mut self, format: Option<DataFormat>) -> Self {
        self.format = format;
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.render.missing_keys = if strict {
            MissingKeys::Error
        } else {
            MissingKeys::Empty
        };
        self
    }

    /// Both the data and the template would have to come from stdin.
    pub fn stdin_conflict(&self) -> bool {
        self.data.is_stdin() && self.templates.is_empty()
    }

    pub fn detector(&self) -> Detector {
        match self.format {
            Some(format) => Detector::only(format),
            None => Detector::new(),
        }
    }
}
