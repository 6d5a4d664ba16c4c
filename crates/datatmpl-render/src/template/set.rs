//! Named template sets.
//!
//! All templates of one invocation share a single environment, registered
//! under their base file names. That lets one file pull in another by name
//! (`{% include "footer.tmpl" %}`, `{% import "macros.tmpl" as m %}`,
//! `{% extends "base.tmpl" %}`). Only the primary template, the first one
//! given, is executed.

use std::fs;
use std::io::Write;
use std::path::Path;

use minijinja::Environment;
use serde::Serialize;

use super::engine::{environment, RenderOptions};
use crate::error::RenderError;

/// A parsed, ready-to-execute set of templates.
///
/// # Example
///
/// ```rust
/// use datatmpl_render::{RenderOptions, TemplateSet};
/// use std::collections::BTreeMap;
///
/// let set = TemplateSet::from_source("<stdin>", "Hello {{ Name }}", RenderOptions::default()).unwrap();
/// let data = BTreeMap::from([("Name", "World")]);
/// assert_eq!(set.render_to_string(&data).unwrap(), "Hello World");
/// ```
pub struct TemplateSet {
    env: Environment<'static>,
    names: Vec<String>,
}

impl TemplateSet {
    /// Reads and parses every file in `paths`.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD, as in
    /// [`from_bytes`](Self::from_bytes). Each file is registered under its
    /// base name. When two files share a
    /// base name, the later one replaces the earlier. Every file must parse,
    /// even ones the primary never references.
    pub fn from_files<I, P>(paths: I, options: RenderOptions) -> Result<Self, RenderError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut set = Self {
            env: environment(options),
            names: Vec::new(),
        };

        for path in paths {
            let path = path.as_ref();
            let bytes = fs::read(path).map_err(|source| RenderError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            set.add(template_name(path), decode(bytes))?;
        }

        if set.names.is_empty() {
            return Err(RenderError::NoTemplates);
        }
        Ok(set)
    }

    /// Parses a single template body registered as `name`.
    pub fn from_source(
        name: impl Into<String>,
        source: impl Into<String>,
        options: RenderOptions,
    ) -> Result<Self, RenderError> {
        let mut set = Self {
            env: environment(options),
            names: Vec::new(),
        };
        set.add(name.into(), source.into())?;
        Ok(set)
    }

    /// Parses a template body given as raw bytes, registered as `name`.
    ///
    /// Invalid UTF-8 sequences are replaced with U+FFFD rather than rejected.
    pub fn from_bytes(
        name: impl Into<String>,
        bytes: Vec<u8>,
        options: RenderOptions,
    ) -> Result<Self, RenderError> {
        Self::from_source(name, decode(bytes), options)
    }

    fn add(&mut self, name: String, source: String) -> Result<(), RenderError> {
        if self.names.contains(&name) {
            tracing::warn!(template = %name, "template name registered twice, later file wins");
        } else {
            self.names.push(name.clone());
        }
        tracing::debug!(template = %name, bytes = source.len(), "parsing template");
        self.env
            .add_template_owned(name, source)
            .map_err(RenderError::Parse)
    }

    /// Name of the template that [`render`](Self::render) executes.
    pub fn primary(&self) -> &str {
        &self.names[0]
    }

    /// Registered template names, in the order they were first given.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Executes the primary template, streaming output into `out`.
    ///
    /// Output written before an execution error is left in `out`.
    pub fn render<S, W>(&self, data: S, out: W) -> Result<(), RenderError>
    where
        S: Serialize,
        W: Write,
    {
        let template = self
            .env
            .get_template(self.primary())
            .map_err(RenderError::Execute)?;
        template
            .render_to_write(data, out)
            .map_err(RenderError::Execute)?;
        Ok(())
    }

    /// Executes the primary template into a string.
    pub fn render_to_string<S: Serialize>(&self, data: S) -> Result<String, RenderError> {
        let mut buf = Vec::new();
        self.render(data, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

fn decode(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes)
        .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
}

fn template_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
