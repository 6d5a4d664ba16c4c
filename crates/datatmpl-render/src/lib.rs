//! # datatmpl-render
//!
//! Parses one or more templates into a [`TemplateSet`] and renders the
//! primary one against template data.
//!
//! ```rust
//! use datatmpl_render::{RenderOptions, TemplateSet};
//! use std::collections::BTreeMap;
//!
//! let set = TemplateSet::from_source("greeting", "Hello {{ Name }}", RenderOptions::default())
//!     .unwrap();
//!
//! let mut out = Vec::new();
//! set.render(BTreeMap::from([("Name", "World")]), &mut out).unwrap();
//! assert_eq!(out, b"Hello World");
//! ```
//!
//! Parse errors ([`RenderError::Parse`], [`RenderError::Read`]) surface while
//! the set is built. Execution errors ([`RenderError::Execute`]) surface from
//! [`TemplateSet::render`].

mod error;
pub mod template;

pub use error::RenderError;
pub use template::{MissingKeys, RenderOptions, TemplateSet};
