//! Caller-supplied fields for one render.
//!
//! A [`Brief`] collects the fields from CLI flags and, optionally, a brief
//! file. Resolving it against the registry produces a [`RenderRequest`] whose
//! every field has a value.
//!
//! # Brief file
//!
//! JSON when the file ends in `.json`, YAML otherwise. Every key is optional;
//! unknown keys are rejected.
//!
//! ```yaml
//! preset: react_component
//! title: Todo
//! spec: Add, toggle, filter
//! lang: ts
//! component_name: TodoList
//! ```

use crate::error::{PromptError, Result};
use crate::prompt::assemble_default;
use crate::registry::{self, Extensions, Preset, resolve_extensions};
use log::{debug, info};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

pub const DEFAULT_SPEC: &str = "";
pub const DEFAULT_KIND: &str = "component";
pub const DEFAULT_FRAMEWORK: &str = "react";
pub const DEFAULT_LANG: &str = "ts";
pub const DEFAULT_COMPONENT_NAME: &str = "App";

/// Every field a [`RenderRequest`] hands to preset templates.
pub const FIELD_NAMES: [&str; 8] = [
    "title",
    "spec",
    "kind",
    "framework",
    "lang",
    "component_name",
    "ext",
    "test_ext",
];

/// Fields as supplied by the caller. `None` means "not given".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Brief {
    pub preset: Option<String>,
    pub title: Option<String>,
    pub spec: Option<String>,
    pub kind: Option<String>,
    pub framework: Option<String>,
    pub lang: Option<String>,
    pub component_name: Option<String>,
}

impl Brief {
    /// Load a brief file, choosing the format from the extension.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let invalid = |message: String| PromptError::Brief {
            path: path.to_path_buf(),
            message,
        };

        let content = std::fs::read_to_string(path).map_err(|e| invalid(e.to_string()))?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        debug!(
            "loading brief '{}' as {}",
            path.display(),
            if is_json { "JSON" } else { "YAML" }
        );

        let parsed = if is_json {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        };
        parsed.map_err(invalid)
    }

    pub fn from_json(json: &str) -> std::result::Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("failed to parse JSON: {}", e))
    }

    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, String> {
        serde_yaml::from_str(yaml).map_err(|e| format!("failed to parse YAML: {}", e))
    }

    /// Layer `top` over `self`; fields set in `top` win.
    pub fn overlay(self, top: Brief) -> Brief {
        Brief {
            preset: top.preset.or(self.preset),
            title: top.title.or(self.title),
            spec: top.spec.or(self.spec),
            kind: top.kind.or(self.kind),
            framework: top.framework.or(self.framework),
            lang: top.lang.or(self.lang),
            component_name: top.component_name.or(self.component_name),
        }
    }

    /// Look up the preset and fill every field.
    ///
    /// Precedence per field: supplied value, then the preset's default, then
    /// the global default. The preset is looked up before anything else so an
    /// unknown name fails without rendering.
    pub fn resolve(self) -> Result<RenderRequest> {
        let name = self.preset.ok_or_else(|| missing("preset", "--preset"))?;
        let preset = registry::lookup(&name)?;
        let title = self.title.ok_or_else(|| missing("title", "--title"))?;

        let field = |value: Option<String>, name: &str, fallback: &str| {
            value
                .or_else(|| preset.default_for(name).map(str::to_string))
                .unwrap_or_else(|| fallback.to_string())
        };

        let lang = field(self.lang, "lang", DEFAULT_LANG);
        let extensions = resolve_extensions(preset.extensions, &lang);

        let request = RenderRequest {
            preset,
            title,
            spec: field(self.spec, "spec", DEFAULT_SPEC),
            kind: field(self.kind, "kind", DEFAULT_KIND),
            framework: field(self.framework, "framework", DEFAULT_FRAMEWORK),
            component_name: field(self.component_name, "component_name", DEFAULT_COMPONENT_NAME),
            lang,
            extensions,
        };

        info!(
            "resolved preset '{}' (lang={}, ext={}, test_ext={})",
            preset.name, request.lang, extensions.ext, extensions.test_ext
        );
        Ok(request)
    }
}

fn missing(field: &str, flag: &str) -> PromptError {
    PromptError::UserError(format!(
        "missing required field '{}' (pass {} or set it in the brief file)",
        field, flag
    ))
}

/// A fully resolved render: a registered preset and a value for every field.
#[derive(Debug, Clone)]
pub struct RenderRequest {
    pub preset: &'static Preset,
    pub title: String,
    pub spec: String,
    pub kind: String,
    pub framework: String,
    pub lang: String,
    pub component_name: String,
    pub extensions: Extensions,
}

impl RenderRequest {
    /// Convert the request to template variables keyed by [`FIELD_NAMES`].
    pub fn to_template_vars(&self) -> HashMap<String, String> {
        let values = [
            self.title.as_str(),
            self.spec.as_str(),
            self.kind.as_str(),
            self.framework.as_str(),
            self.lang.as_str(),
            self.component_name.as_str(),
            self.extensions.ext,
            self.extensions.test_ext,
        ];
        FIELD_NAMES
            .iter()
            .zip(values)
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    }

    /// Render the preset body and assemble the full prompt.
    pub fn render(&self) -> Result<String> {
        let body = self.preset.render(&self.to_template_vars())?;
        Ok(assemble_default(&self.title, &body))
    }
}
