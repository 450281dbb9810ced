//! Built-in preset registry.
//!
//! The registry is a read-only table built once on first use. There is no
//! API for adding, removing, or changing presets at runtime.

mod extensions;
mod presets;

pub use extensions::{Extensions, resolve_extensions};
pub use presets::PRESET_NAMES;

use crate::error::{PromptError, Result};
use crate::prompt::{TemplateError, placeholders, render_template};
use log::debug;
use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

static REGISTRY: LazyLock<BTreeMap<&'static str, Preset>> = LazyLock::new(|| {
    presets::builtin()
        .into_iter()
        .map(|preset| (preset.name, preset))
        .collect()
});

/// How a preset derives its `{ext}` and `{test_ext}` fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtensionPolicy {
    /// Chosen from the requested language (TSX vs JSX).
    ByLanguage,
    /// Always the `txt` placeholder; the template does not use them.
    Fixed,
}

/// A named template plus default values for some of its placeholders.
#[derive(Debug)]
pub struct Preset {
    pub name: &'static str,
    pub description: &'static str,
    pub template: &'static str,
    defaults: &'static [(&'static str, &'static str)],
    pub extensions: ExtensionPolicy,
}

impl Preset {
    /// Default value this preset provides for `field`, if any.
    pub fn default_for(&self, field: &str) -> Option<&'static str> {
        self.defaults
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, value)| *value)
    }

    /// All `(field, value)` defaults in declaration order.
    pub fn defaults(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.defaults.iter().copied()
    }

    /// Placeholder names used by the template, in order of first use.
    pub fn placeholders(&self) -> Result<Vec<&'static str>> {
        Ok(placeholders(self.template)?)
    }

    /// Render the template against `fields` layered over this preset's defaults.
    ///
    /// Supplied fields win over defaults. A placeholder neither provides is
    /// reported as [`PromptError::MissingPlaceholder`].
    pub fn render(&self, fields: &HashMap<String, String>) -> Result<String> {
        let mut vars: HashMap<String, String> = self
            .defaults()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        vars.extend(fields.iter().map(|(k, v)| (k.clone(), v.clone())));

        debug!(
            "rendering preset '{}' with fields: {:?}",
            self.name,
            vars.keys().collect::<Vec<_>>()
        );

        render_template(self.template, &vars).map_err(|err| match err {
            TemplateError::UndefinedPlaceholder { name, .. } => PromptError::MissingPlaceholder {
                preset: self.name.to_string(),
                name,
            },
            other => PromptError::Template(other),
        })
    }
}

/// Look up a preset by name.
pub fn lookup(name: &str) -> Result<&'static Preset> {
    REGISTRY
        .get(name)
        .ok_or_else(|| PromptError::UnknownPreset {
            name: name.to_string(),
            available: names().into_iter().map(str::to_string).collect(),
        })
}

/// Registered preset names in sorted order.
pub fn names() -> Vec<&'static str> {
    REGISTRY.keys().copied().collect()
}

/// All registered presets in name order.
pub fn presets() -> impl Iterator<Item = &'static Preset> {
    REGISTRY.values()
}
