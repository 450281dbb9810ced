//! Six-section prompt assembly.
//!
//! The headings and their order are an output contract with whatever consumes
//! the prompt downstream; they must not change.

use super::blocks;

pub const SYSTEM_HEADING: &str = "### SYSTEM";
pub const DEVELOPER_HEADING: &str = "### DEVELOPER";
pub const USER_HEADING: &str = "### USER";
pub const CONSTRAINTS_HEADING: &str = "### CONSTRAINTS";
pub const OUTPUT_CONTRACT_HEADING: &str = "### OUTPUT CONTRACT";
pub const EXEMPLAR_HEADING: &str = "### EXEMPLAR";

/// Section headings in output order.
pub const SECTION_HEADINGS: [&str; 6] = [
    SYSTEM_HEADING,
    DEVELOPER_HEADING,
    USER_HEADING,
    CONSTRAINTS_HEADING,
    OUTPUT_CONTRACT_HEADING,
    EXEMPLAR_HEADING,
];

/// Concatenate the six labeled sections into one prompt.
///
/// Each section is its heading line followed by the trimmed text; sections are
/// separated by a blank line and the result ends with a single newline. The
/// USER section is `Title: <title>`, a blank line, then the rendered body.
pub fn assemble(
    title: &str,
    user_body: &str,
    system_base: &str,
    dev_base: &str,
    constraints: &str,
    artifact_contract: &str,
    exemplar: &str,
) -> String {
    let user = format!("Title: {}\n\n{}", title.trim(), user_body.trim());
    let bodies = [
        system_base,
        dev_base,
        user.as_str(),
        constraints,
        artifact_contract,
        exemplar,
    ];

    let mut out = String::new();
    for (heading, body) in SECTION_HEADINGS.iter().zip(bodies) {
        if !out.is_empty() {
            out.push_str("\n\n");
        }
        out.push_str(heading);
        out.push('\n');
        out.push_str(body.trim());
    }
    out.push('\n');
    out
}

/// [`assemble`] with the built-in prose blocks.
pub fn assemble_default(title: &str, user_body: &str) -> String {
    assemble(
        title,
        user_body,
        blocks::SYSTEM_BASE,
        blocks::DEV_BASE,
        blocks::CONSTRAINTS,
        blocks::ARTIFACT_CONTRACT,
        blocks::EXEMPLAR,
    )
}
