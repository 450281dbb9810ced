//! `--list-presets`: describe every built-in preset.

use crate::error::{PromptError, Result};
use crate::registry;
use std::io::Write;

/// Print each preset with its placeholders and defaults.
///
/// ```text
/// python_script    Standalone Python command-line script
///     placeholders: spec, kind
///     defaults: kind=script
/// ```
pub fn cmd_list_presets<W: Write>(out: &mut W) -> Result<()> {
    let mut text = String::new();

    for preset in registry::presets() {
        let placeholders = preset.placeholders()?;
        text.push_str(&format!("{:<16} {}\n", preset.name, preset.description));
        text.push_str(&format!("    placeholders: {}\n", placeholders.join(", ")));

        let defaults: Vec<String> = preset
            .defaults()
            .map(|(field, value)| format!("{}={}", field, value))
            .collect();
        if !defaults.is_empty() {
            text.push_str(&format!("    defaults: {}\n", defaults.join(", ")));
        }
    }

    out.write_all(text.as_bytes())
        .and_then(|()| out.flush())
        .map_err(|e| PromptError::filesystem("<stdout>", e))
}
