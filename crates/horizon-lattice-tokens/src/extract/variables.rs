//! Custom-property scanning over raw CSS text.
//!
//! This is deliberately not a CSS parser. Declarations are found with a
//! regular expression and blocks are located positionally:
//!
//! - `@theme` ends at the first line consisting only of `}`, so a nested
//!   block inside the theme cuts it short.
//! - `:root` and `.dark` end at the first `}`.

use std::sync::LazyLock;

use regex::Regex;

use super::VariableMap;
use crate::logging::targets;
use crate::types::RawVariable;

static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("comment pattern"));

static DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"--([A-Za-z0-9_.\-]+)\s*:\s*([^;]*);").expect("declaration pattern")
});

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern"));

static THEME_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?ms)@theme[^{]*\{(.*?)^\}[ \t]*\r?$").expect("theme block pattern")
});

static ROOT_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":root\s*\{([^}]*)\}").expect("root block pattern"));

static DARK_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.dark\s*\{([^}]*)\}").expect("dark block pattern"));

/// Light and dark custom properties from `:root` and `.dark`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootAndDark {
    pub light: VariableMap,
    pub dark: VariableMap,
}

/// Extract every `--name: value;` declaration in source order.
///
/// Comments are ignored. Values are trimmed and whitespace runs collapse to
/// a single space, so multi-line font stacks and shadow lists come out as
/// one logical value. Declarations with an empty value are dropped.
///
/// # Example
///
/// ```
/// use horizon_lattice_tokens::extract::extract_variables;
///
/// let vars = extract_variables("--font-sans:\n  Inter,\n  sans-serif;");
/// assert_eq!(vars[0].name, "--font-sans");
/// assert_eq!(vars[0].raw_value, "Inter, sans-serif");
/// ```
pub fn extract_variables(css: &str) -> Vec<RawVariable> {
    let css = COMMENT.replace_all(css, "");

    DECLARATION
        .captures_iter(&css)
        .filter_map(|caps| {
            let value = WHITESPACE.replace_all(caps[2].trim(), " ");
            if value.is_empty() {
                tracing::trace!(target: targets::EXTRACT, name = &caps[1], "empty declaration");
                return None;
            }
            Some(RawVariable::new(format!("--{}", &caps[1]), value))
        })
        .collect()
}

/// Extract declarations from the first `@theme` block.
///
/// Modifiers such as `@theme inline reference` are accepted. Returns an
/// empty list when the text has no theme block.
pub fn extract_theme_block(css: &str) -> Vec<RawVariable> {
    let css = COMMENT.replace_all(css, "");

    match THEME_BLOCK.captures(&css) {
        Some(caps) => extract_variables(&caps[1]),
        None => {
            tracing::debug!(target: targets::EXTRACT, "no @theme block found");
            Vec::new()
        }
    }
}

/// Check whether the text contains an `@theme` block.
pub fn has_theme_block(css: &str) -> bool {
    THEME_BLOCK.is_match(&COMMENT.replace_all(css, ""))
}

/// Extract the first `:root` and `.dark` blocks into separate maps.
///
/// A name declared twice in one block keeps its last value. A missing block
/// yields an empty map.
pub fn extract_root_and_dark(css: &str) -> RootAndDark {
    let css = COMMENT.replace_all(css, "");

    RootAndDark {
        light: block_variables(&css, &ROOT_BLOCK, ":root"),
        dark: block_variables(&css, &DARK_BLOCK, ".dark"),
    }
}

fn block_variables(css: &str, pattern: &Regex, label: &str) -> VariableMap {
    match pattern.captures(css) {
        Some(caps) => VariableMap::last_wins(&extract_variables(&caps[1])),
        None => {
            tracing::debug!(target: targets::EXTRACT, block = label, "block not found");
            VariableMap::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_declarations_in_order() {
        let css = r#"
            --color-red-500: oklch(63.7% 0.237 25.331);
            --spacing-0.5: 0.125rem;
            /* --commented-out: 1px; */
            --shadow-sm: 0 1px 3px 0 rgb(0 0 0 / 0.1),
                0 1px 2px -1px rgb(0 0 0 / 0.1);
        "#;
        let vars = extract_variables(css);

        assert_eq!(vars.len(), 3);
        assert_eq!(vars[0], RawVariable::new("--color-red-500", "oklch(63.7% 0.237 25.331)"));
        assert_eq!(vars[1].name, "--spacing-0.5");
        assert_eq!(
            vars[2].raw_value,
            "0 1px 3px 0 rgb(0 0 0 / 0.1), 0 1px 2px -1px rgb(0 0 0 / 0.1)"
        );
    }

    #[test]
    fn var_references_are_not_declarations() {
        let css = ".btn { color: var(--primary); } --a: var(--b);";
        let vars = extract_variables(css);
        assert_eq!(vars, vec![RawVariable::new("--a", "var(--b)")]);
    }

    #[test]
    fn theme_block_with_modifiers() {
        let css = "--outside: 1px;\n@theme inline reference {\n  --radius-sm: 4px;\n  --color-white: #fff;\n}\n--after: 2px;\n";
        let vars = extract_theme_block(css);

        let names: Vec<_> = vars.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["--radius-sm", "--color-white"]);
        assert!(has_theme_block(css));
    }

    #[test]
    fn theme_block_ends_at_first_closing_line() {
        let css = "@theme {\n  --a: 1px;\n  @keyframes spin {\n    to { rotate: 360deg; }\n}\n  --b: 2px;\n}\n";
        let vars = extract_theme_block(css);
        assert_eq!(vars.len(), 1);
        assert_eq!(vars[0].name, "--a");
    }

    #[test]
    fn missing_theme_block_is_empty() {
        assert!(extract_theme_block(":root { --a: 1px; }").is_empty());
        assert!(!has_theme_block(":root { --a: 1px; }"));
    }

    #[test]
    fn root_and_dark_blocks() {
        let css = r#"
            :root {
              --background: oklch(1 0 0);
              --radius: 0.625rem;
              --background: oklch(0.99 0 0);
            }
            .dark {
              --background: oklch(0.145 0 0);
            }
        "#;
        let blocks = extract_root_and_dark(css);

        assert_eq!(blocks.light.len(), 2);
        assert_eq!(blocks.light.get("background"), Some("oklch(0.99 0 0)"));
        assert_eq!(blocks.dark.get("--background"), Some("oklch(0.145 0 0)"));
    }

    #[test]
    fn missing_dark_block_is_empty() {
        let blocks = extract_root_and_dark(":root { --a: 1px; }");
        assert_eq!(blocks.light.len(), 1);
        assert!(blocks.dark.is_empty());
    }
}
