//! Prompt construction.
//!
//! - **Template**: `{placeholder}` substitution used to render preset bodies
//! - **Blocks**: the fixed prose shared by every preset
//! - **Assembler**: joins everything into the six labeled sections
//!
//! # Output layout
//!
//! ```text
//! ### SYSTEM
//! ...
//!
//! ### DEVELOPER
//! ...
//!
//! ### USER
//! Title: {title}
//!
//! {rendered preset body}
//!
//! ### CONSTRAINTS
//! ...
//!
//! ### OUTPUT CONTRACT
//! ...
//!
//! ### EXEMPLAR
//! ...
//! ```

mod assembler;
pub mod blocks;
mod template;

pub use assembler::assemble_default;
pub use template::{TemplateError, placeholders, render_template};

#[cfg(test)]
pub use assembler::{CONSTRAINTS_HEADING, SECTION_HEADINGS, USER_HEADING};
#[cfg(test)]
pub use template::vars;
