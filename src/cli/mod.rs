//! CLI argument parsing for promptsmith.
//!
//! Uses clap derive macros for declarative argument definitions. There are no
//! subcommands; the implementation lives in the `commands` module.

use crate::brief::Brief;
use crate::registry::PRESET_NAMES;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Promptsmith: assemble a code-generation prompt from a built-in preset.
///
/// The prompt has six sections (SYSTEM, DEVELOPER, USER, CONSTRAINTS,
/// OUTPUT CONTRACT, EXEMPLAR). The USER section is the chosen preset rendered
/// with the fields below.
#[derive(Parser, Debug)]
#[command(name = "promptsmith")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Preset to render.
    #[arg(long, value_parser = PRESET_NAMES, required_unless_present_any = ["brief", "list_presets"])]
    pub preset: Option<String>,

    /// Title shown at the top of the USER section.
    #[arg(long, required_unless_present_any = ["brief", "list_presets"])]
    pub title: Option<String>,

    /// Free-text description of the task [default: ""].
    #[arg(long)]
    pub spec: Option<String>,

    /// Kind of artifact, e.g. component or script [default: component].
    #[arg(long)]
    pub kind: Option<String>,

    /// Framework to target [default: react].
    #[arg(long)]
    pub framework: Option<String>,

    /// Language token; `ts`/`typescript` select .tsx for react_component [default: ts].
    #[arg(long)]
    pub lang: Option<String>,

    /// Component name used for react_component file paths [default: App].
    #[arg(long = "component_name", visible_alias = "component-name")]
    pub component_name: Option<String>,

    /// Write the prompt to this file instead of standard output.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Read fields from a JSON (.json) or YAML brief file. Flags override it.
    #[arg(long)]
    pub brief: Option<PathBuf>,

    /// List the built-in presets with their placeholders and exit.
    #[arg(long)]
    pub list_presets: bool,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parse command-line arguments.
    ///
    /// Exits with usage and status 2 on invalid arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The fields given as flags, as a brief. Flags left out stay `None`.
    pub fn to_brief(&self) -> Brief {
        Brief {
            preset: self.preset.clone(),
            title: self.title.clone(),
            spec: self.spec.clone(),
            kind: self.kind.clone(),
            framework: self.framework.clone(),
            lang: self.lang.clone(),
            component_name: self.component_name.clone(),
        }
    }
}
