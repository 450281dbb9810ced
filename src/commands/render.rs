//! Render one prompt and emit it.

use crate::brief::Brief;
use crate::cli::Cli;
use crate::error::{PromptError, Result};
use crate::fs::atomic_write_file;
use log::info;
use std::io::Write;

/// Execute a render.
///
/// The prompt is fully built before any output is touched, so a failing run
/// never creates or truncates the `--out` file.
pub fn cmd_render<W: Write>(cli: &Cli, stdout: &mut W) -> Result<()> {
    let prompt = build_prompt(cli)?;

    match &cli.out {
        Some(path) => {
            atomic_write_file(path, &prompt)?;
            info!("wrote {} bytes to '{}'", prompt.len(), path.display());
        }
        None => {
            stdout
                .write_all(prompt.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|e| PromptError::filesystem("<stdout>", e))?;
        }
    }

    Ok(())
}

/// Merge the brief file (if any) under the flags, resolve, and render.
pub(super) fn build_prompt(cli: &Cli) -> Result<String> {
    let flags = cli.to_brief();
    let brief = match &cli.brief {
        Some(path) => Brief::load(path)?.overlay(flags),
        None => flags,
    };

    brief.resolve()?.render()
}
