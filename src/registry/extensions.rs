//! File extension resolution for presets that name source files.

use super::ExtensionPolicy;

/// Source and test file extensions substituted as `{ext}` and `{test_ext}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extensions {
    pub ext: &'static str,
    pub test_ext: &'static str,
}

const TYPESCRIPT: Extensions = Extensions {
    ext: "tsx",
    test_ext: "test.tsx",
};

const JAVASCRIPT: Extensions = Extensions {
    ext: "jsx",
    test_ext: "test.jsx",
};

const PLACEHOLDER: Extensions = Extensions {
    ext: "txt",
    test_ext: "test.txt",
};

/// Pick extensions for a preset's policy and the requested language token.
///
/// `ts` and `typescript` select TSX; every other token selects JSX.
/// Presets with a fixed policy always get `txt` and ignore the language.
pub fn resolve_extensions(policy: ExtensionPolicy, lang: &str) -> Extensions {
    match policy {
        ExtensionPolicy::Fixed => PLACEHOLDER,
        ExtensionPolicy::ByLanguage => {
            let lang = lang.trim();
            if lang.eq_ignore_ascii_case("ts") || lang.eq_ignore_ascii_case("typescript") {
                TYPESCRIPT
            } else {
                JAVASCRIPT
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn by_lang(lang: &str) -> (&'static str, &'static str) {
        let e = resolve_extensions(ExtensionPolicy::ByLanguage, lang);
        (e.ext, e.test_ext)
    }

    #[test]
    fn test_typescript_tokens_select_tsx() {
        assert_eq!(by_lang("ts"), ("tsx", "test.tsx"));
        assert_eq!(by_lang("typescript"), ("tsx", "test.tsx"));
        assert_eq!(by_lang(" TypeScript "), ("tsx", "test.tsx"));
    }

    #[test]
    fn test_everything_else_selects_jsx() {
        assert_eq!(by_lang("js"), ("jsx", "test.jsx"));
        assert_eq!(by_lang("python"), ("jsx", "test.jsx"));
        assert_eq!(by_lang(""), ("jsx", "test.jsx"));
        assert_eq!(by_lang("tsx"), ("jsx", "test.jsx"));
    }

    #[test]
    fn test_fixed_policy_ignores_language() {
        for lang in ["ts", "js", "python"] {
            assert_eq!(resolve_extensions(ExtensionPolicy::Fixed, lang), PLACEHOLDER);
        }
    }
}
