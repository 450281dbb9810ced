//! Exit code constants for the promptsmith CLI.
//!
//! - 0: Success
//! - 1: User error (unknown preset, missing title, bad brief file)
//! - 2: Argument parsing error (emitted by clap itself)
//! - 3: Template failure (missing placeholder, malformed template)
//! - 4: Filesystem failure while writing output

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: unknown preset, missing required field, or unusable brief.
pub const USER_ERROR: i32 = 1;

/// Usage error. Never returned by our own code; clap exits with it directly.
#[allow(dead_code)]
pub const USAGE_ERROR: i32 = 2;

/// Template failure: a placeholder could not be resolved or the template is malformed.
pub const TEMPLATE_FAILURE: i32 = 3;

/// Filesystem failure: the output path could not be written.
pub const FILESYSTEM_FAILURE: i32 = 4;
