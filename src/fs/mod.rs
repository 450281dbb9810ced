//! Filesystem utilities for promptsmith.
//!
//! Output files are written atomically so a failed run never leaves a
//! truncated prompt behind.

pub mod atomic;

pub use atomic::atomic_write_file;
