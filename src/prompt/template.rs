//! Placeholder substitution for preset templates.
//!
//! # Syntax
//!
//! - `{name}` - Substitutes the value of field `name`
//! - `{{` - Renders as literal `{`
//! - `}}` - Renders as literal `}`
//!
//! Unresolved placeholders are an error, never an empty substitution.
//! Substituted values are inserted verbatim: a value that itself contains
//! `{name}` is not expanded again.

use std::collections::HashMap;
use thiserror::Error;

/// Error type for template rendering failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A placeholder was referenced but no value was supplied for it.
    #[error("undefined placeholder '{name}' at position {position} in template")]
    UndefinedPlaceholder { name: String, position: usize },

    /// A `{` was found without a matching `}`.
    #[error("unmatched '{{' at position {position} in template")]
    UnmatchedBrace { position: usize },

    /// An empty placeholder name was found (e.g., `{}` or `{ }`).
    #[error("empty placeholder '{{}}' at position {position} in template")]
    EmptyPlaceholder { position: usize },
}

#[derive(Debug, PartialEq, Eq)]
enum Segment<'a> {
    Text(String),
    Placeholder { name: &'a str, position: usize },
}

/// Split a template into literal text and placeholder references.
///
/// Escapes are resolved here, so `Text` segments hold final output.
fn parse(template: &str) -> Result<Vec<Segment<'_>>, TemplateError> {
    let mut segments = Vec::new();
    let mut text = String::new();
    let mut chars = template.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        match ch {
            '{' if matches!(chars.peek(), Some((_, '{'))) => {
                chars.next();
                text.push('{');
            }
            '{' => {
                let end = loop {
                    match chars.next() {
                        Some((end, '}')) => break end,
                        Some(_) => {}
                        None => return Err(TemplateError::UnmatchedBrace { position: pos }),
                    }
                };

                // '{' is a single byte, so the name starts right after it.
                let name = template[pos + 1..end].trim();
                if name.is_empty() {
                    return Err(TemplateError::EmptyPlaceholder { position: pos });
                }

                if !text.is_empty() {
                    segments.push(Segment::Text(std::mem::take(&mut text)));
                }
                segments.push(Segment::Placeholder {
                    name,
                    position: pos,
                });
            }
            '}' => {
                // `}}` collapses to one brace; a lone `}` is literal.
                if matches!(chars.peek(), Some((_, '}'))) {
                    chars.next();
                }
                text.push('}');
            }
            _ => text.push(ch),
        }
    }

    if !text.is_empty() {
        segments.push(Segment::Text(text));
    }

    Ok(segments)
}

/// Render a template by substituting every `{name}` from `variables`.
///
/// ```ignore
/// let vars = vars([("spec", "compute fibonacci")]);
/// assert_eq!(render_template("Task: {spec}.", &vars)?, "Task: compute fibonacci.");
/// ```
pub fn render_template(
    template: &str,
    variables: &HashMap<String, String>,
) -> Result<String, TemplateError> {
    let mut result = String::with_capacity(template.len());

    for segment in parse(template)? {
        match segment {
            Segment::Text(text) => result.push_str(&text),
            Segment::Placeholder { name, position } => match variables.get(name) {
                Some(value) => result.push_str(value),
                None => {
                    return Err(TemplateError::UndefinedPlaceholder {
                        name: name.to_string(),
                        position,
                    });
                }
            },
        }
    }

    Ok(result)
}

/// Distinct placeholder names referenced by a template, in order of first use.
pub fn placeholders(template: &str) -> Result<Vec<&str>, TemplateError> {
    let mut names: Vec<&str> = Vec::new();
    for segment in parse(template)? {
        if let Segment::Placeholder { name, .. } = segment
            && !names.contains(&name)
        {
            names.push(name);
        }
    }
    Ok(names)
}

/// Helper to create a variables map from a list of key-value pairs.
#[cfg(test)]
pub fn vars<I, K, V>(pairs: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitutes_named_fields() {
        let vars = vars([("spec", "compute fibonacci"), ("kind", "script")]);
        let result = render_template("Write a {kind}.\nTask: {spec}.", &vars).unwrap();
        assert_eq!(result, "Write a script.\nTask: compute fibonacci.");
    }

    #[test]
    fn test_plain_text_passes_through() {
        let result = render_template("No placeholders here", &HashMap::new()).unwrap();
        assert_eq!(result, "No placeholders here");
        assert_eq!(render_template("", &HashMap::new()).unwrap(), "");
    }

    #[test]
    fn test_escaped_braces() {
        let vars = vars([("code", "404")]);
        let result = render_template(r#"{{ "status": {code} }}"#, &vars).unwrap();
        assert_eq!(result, r#"{ "status": 404 }"#);
    }

    #[test]
    fn test_lone_closing_brace_is_literal() {
        let result = render_template("a } b", &HashMap::new()).unwrap();
        assert_eq!(result, "a } b");
    }

    #[test]
    fn test_undefined_placeholder_reports_name_and_position() {
        let err = render_template("Task: {spec}", &HashMap::new()).unwrap_err();
        assert_eq!(
            err,
            TemplateError::UndefinedPlaceholder {
                name: "spec".to_string(),
                position: 6,
            }
        );
    }

    #[test]
    fn test_unmatched_brace_error() {
        let err = render_template("Task: {spec", &vars([("spec", "x")])).unwrap_err();
        assert_eq!(err, TemplateError::UnmatchedBrace { position: 6 });
    }

    #[test]
    fn test_empty_and_blank_placeholder_errors() {
        let err = render_template("Hello {}", &HashMap::new()).unwrap_err();
        assert_eq!(err, TemplateError::EmptyPlaceholder { position: 6 });

        let err = render_template("Hello {  }", &HashMap::new()).unwrap_err();
        assert_eq!(err, TemplateError::EmptyPlaceholder { position: 6 });
    }

    #[test]
    fn test_whitespace_inside_placeholder_is_trimmed() {
        let result = render_template("src/{ component_name }.tsx", &vars([("component_name", "App")]))
            .unwrap();
        assert_eq!(result, "src/App.tsx");
    }

    #[test]
    fn test_values_are_not_reinterpreted() {
        let vars = vars([("spec", "render {title} and {{x}}")]);
        let result = render_template("Task: {spec}.", &vars).unwrap();
        assert_eq!(result, "Task: render {title} and {{x}}.");
    }

    #[test]
    fn test_repeated_and_adjacent_placeholders() {
        let vars = vars([("component_name", "TodoList"), ("ext", "tsx")]);
        let result =
            render_template("{component_name}.{ext} / {component_name}{ext}", &vars).unwrap();
        assert_eq!(result, "TodoList.tsx / TodoListtsx");
    }

    #[test]
    fn test_unicode_in_template_and_values() {
        let vars = vars([("spec", "日本語の説明")]);
        let result = render_template("→ {spec} ←", &vars).unwrap();
        assert_eq!(result, "→ 日本語の説明 ←");
    }

    #[test]
    fn test_placeholders_in_first_use_order() {
        let names = placeholders("{b} {a} {{c}} {b} { d }").unwrap();
        assert_eq!(names, vec!["b", "a", "d"]);
    }

    #[test]
    fn test_placeholders_propagates_syntax_errors() {
        assert_eq!(
            placeholders("oops {").unwrap_err(),
            TemplateError::UnmatchedBrace { position: 5 }
        );
    }

    #[test]
    fn test_error_display() {
        let err = TemplateError::UndefinedPlaceholder {
            name: "ext".to_string(),
            position: 10,
        };
        assert_eq!(
            err.to_string(),
            "undefined placeholder 'ext' at position 10 in template"
        );
        assert_eq!(
            TemplateError::UnmatchedBrace { position: 5 }.to_string(),
            "unmatched '{' at position 5 in template"
        );
        assert_eq!(
            TemplateError::EmptyPlaceholder { position: 3 }.to_string(),
            "empty placeholder '{}' at position 3 in template"
        );
    }
}
