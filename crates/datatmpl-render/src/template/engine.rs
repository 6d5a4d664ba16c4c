//! MiniJinja environment setup.
//!
//! datatmpl renders plain text, so the environment differs from MiniJinja's
//! defaults in three ways:
//!
//! - auto-escaping is off for every template name, `.html` included
//! - a trailing newline in the template is kept in the output
//! - undefined values follow [`MissingKeys`]

use minijinja::{AutoEscape, Environment, UndefinedBehavior};

/// What happens when a template references a key the data doesn't have.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingKeys {
    /// Render missing keys, and attributes of missing keys, as empty text.
    #[default]
    Empty,
    /// Fail execution on the first undefined reference.
    Error,
}

impl MissingKeys {
    fn undefined_behavior(self) -> UndefinedBehavior {
        match self {
            MissingKeys::Empty => UndefinedBehavior::Chainable,
            MissingKeys::Error => UndefinedBehavior::Strict,
        }
    }
}

/// Options applied to every template in a set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub missing_keys: MissingKeys,
}

impl RenderOptions {
    pub fn strict() -> Self {
        Self {
            missing_keys: MissingKeys::Error,
        }
    }
}

/// Builds a fresh environment configured by `options`.
pub(crate) fn environment(options: RenderOptions) -> Environment<'static> {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_name| AutoEscape::None);
    env.set_keep_trailing_newline(true);
    env.set_undefined_behavior(options.missing_keys.undefined_behavior());
    env
}
