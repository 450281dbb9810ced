//! Command implementations for promptsmith.
//!
//! A run either lists the presets or renders one prompt; both write to the
//! process's standard output unless `--out` redirects the prompt.

mod list;
mod render;

use crate::cli::Cli;
use crate::error::Result;
use std::io;

/// Dispatch a parsed command line to its implementation.
pub fn dispatch(cli: &Cli) -> Result<()> {
    let mut stdout = io::stdout().lock();
    if cli.list_presets {
        list::cmd_list_presets(&mut stdout)
    } else {
        render::cmd_render(cli, &mut stdout)
    }
}
