//! Template parsing and execution.
//!
//! Templates use MiniJinja's Jinja2 syntax: `{{ name }}` substitutions,
//! `{% if %}`/`{% for %}` control flow, filters, macros, includes and
//! inheritance.
//!
//! ```text
//! Template: Hello {{ Name }}, you have {{ items | length }} items
//! Data:     {"Name": "World", "items": [1, 2]}
//! Output:   Hello World, you have 2 items
//! ```
//!
//! ## Key Types
//!
//! - [`TemplateSet`]: Parsed templates plus the name of the one to execute
//! - [`RenderOptions`]: Per-set engine options, currently [`MissingKeys`]

mod engine;
mod set;

pub use engine::{MissingKeys, RenderOptions};
pub use set::TemplateSet;
