//! Rule-based classification of custom properties into token families.
//!
//! # Example
//!
//! ```
//! use horizon_lattice_tokens::categorize::categorize;
//! use horizon_lattice_tokens::prelude::*;
//!
//! let vars = vec![
//!     RawVariable::new("--color-red-500", "oklch(63.7% 0.237 25.331)"),
//!     RawVariable::new("--radius-sm", "4px"),
//!     RawVariable::new("--spacing", "0.25rem"),
//! ];
//! let tokens = categorize(&vars);
//!
//! assert_eq!(tokens.colors[0].path, vec!["red", "500"]);
//! assert_eq!(tokens.radius[0].value, 4.0);
//! assert_eq!(tokens.spacing.len(), 33);
//! ```

mod rules;
mod spacing;
mod typography;

pub use rules::{RULES, Rule, classify, rule_for};
pub use spacing::{SPACING_SCALE, step_name};
pub use typography::parse_line_height;

use crate::convert::ROOT_FONT_SIZE;
use crate::extract::VariableMap;
use crate::logging::targets;
use crate::types::{RawVariable, TokenSet};

/// State shared by the rules during one categorization pass.
pub(crate) struct Context<'a> {
    pub tokens: TokenSet,
    /// Every input variable by name, for modifier lookups. A name declared
    /// more than once keeps its last value, matching how tokens are replaced.
    pub siblings: &'a VariableMap,
    pub root_font_size: f32,
}

impl<'a> Context<'a> {
    pub(crate) fn new(siblings: &'a VariableMap, root_font_size: f32) -> Self {
        Self {
            tokens: TokenSet::new(),
            siblings,
            root_font_size,
        }
    }
}

/// Classifies raw variables into a [`TokenSet`].
#[derive(Debug, Clone)]
pub struct Categorizer {
    root_font_size: f32,
    synthesize_spacing: bool,
}

impl Default for Categorizer {
    fn default() -> Self {
        Self {
            root_font_size: ROOT_FONT_SIZE,
            synthesize_spacing: true,
        }
    }
}

impl Categorizer {
    /// Create a categorizer with a 16px root and spacing synthesis enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pixel size of one `rem`.
    pub fn with_root_font_size(mut self, root_font_size: f32) -> Self {
        self.root_font_size = root_font_size;
        self
    }

    /// Enable or disable expansion of a lone `--spacing` base.
    pub fn with_spacing_synthesis(mut self, enabled: bool) -> Self {
        self.synthesize_spacing = enabled;
        self
    }

    /// Classify every variable, then run the spacing post-pass.
    ///
    /// Unmatched names and unparseable values are skipped; this never fails.
    pub fn categorize(&self, vars: &[RawVariable]) -> TokenSet {
        let siblings = VariableMap::last_wins(vars);
        let mut ctx = Context::new(&siblings, self.root_font_size);

        for var in vars {
            let name = var.bare_name();
            let value = var.raw_value.trim();

            match rule_for(name) {
                Some(rule) => {
                    tracing::trace!(target: targets::CATEGORIZE, name, rule = rule.name, "matched");
                    rule.apply(&mut ctx, name, value);
                }
                None => {
                    tracing::trace!(target: targets::CATEGORIZE, name, "no rule matched");
                }
            }
        }

        let mut tokens = ctx.tokens;
        if self.synthesize_spacing {
            spacing::synthesize(&mut tokens);
        }

        tracing::debug!(
            target: targets::CATEGORIZE,
            input = vars.len(),
            tokens = tokens.len(),
            colors = tokens.colors.len(),
            shadows = tokens.shadows.len(),
            typography = tokens.typography.len(),
            "categorized variables"
        );

        tokens
    }
}

/// Classify variables with the default [`Categorizer`].
pub fn categorize(vars: &[RawVariable]) -> TokenSet {
    Categorizer::default().categorize(vars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FloatFamily;

    #[test]
    fn routes_colors_and_radius() {
        let vars = vec![
            RawVariable::new("--color-red-500", "oklch(63.7% 0.237 25.331)"),
            RawVariable::new("--radius-sm", "4px"),
        ];
        let set = categorize(&vars);

        assert_eq!(set.colors.len(), 1);
        assert_eq!(set.colors[0].path, vec!["red", "500"]);
        assert_eq!(set.radius.len(), 1);
        assert_eq!(set.radius[0].path, vec!["sm"]);
        assert_eq!(set.radius[0].value, 4.0);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn spacing_synthesis() {
        let set = categorize(&[RawVariable::new("--spacing", "4px")]);

        assert_eq!(set.spacing.len(), 33);
        let step = set.float(FloatFamily::Spacing, &["4"]).unwrap();
        assert_eq!(step.value, 16.0);
    }

    #[test]
    fn spacing_synthesis_can_be_disabled() {
        let set = Categorizer::new()
            .with_spacing_synthesis(false)
            .categorize(&[RawVariable::new("--spacing", "0.25rem")]);

        assert_eq!(set.spacing.len(), 1);
        assert_eq!(set.spacing[0].path, vec!["base"]);
        assert_eq!(set.spacing[0].value, 4.0);
    }

    #[test]
    fn root_font_size_is_configurable() {
        let set = Categorizer::new()
            .with_root_font_size(10.0)
            .categorize(&[RawVariable::new("--radius-lg", "1rem")]);
        assert_eq!(set.radius[0].value, 10.0);
    }

    #[test]
    fn bad_values_do_not_abort_the_pass() {
        let vars = vec![
            RawVariable::new("--color-good", "#000"),
            RawVariable::new("--color-bad", "not-a-color"),
            RawVariable::new("--radius-bad", "auto"),
            RawVariable::new("--unknown-thing", "1px"),
            RawVariable::new("--color-also-good", "white"),
        ];
        let set = categorize(&vars);

        assert_eq!(set.colors.len(), 2);
        assert!(set.color(&["bad"]).is_none());
        assert!(set.radius.is_empty());
    }

    #[test]
    fn duplicate_paths_last_wins() {
        let vars = vec![
            RawVariable::new("--color-red-500", "#ff0000"),
            RawVariable::new("--color-blue-500", "#0000ff"),
            RawVariable::new("--color-red-500", "#00ff00"),
        ];
        let set = categorize(&vars);

        assert_eq!(set.colors.len(), 2);
        assert_eq!(set.colors[0].raw_value, "#00ff00");
    }

    #[test]
    fn dotted_names_keep_their_decimal() {
        let set = categorize(&[RawVariable::new("--radius-1.5", "6px")]);
        assert_eq!(set.radius[0].path, vec!["1.5"]);
    }

    #[test]
    fn names_without_dashes_are_accepted() {
        let set = categorize(&[RawVariable::new("color-white", "#fff")]);
        assert_eq!(set.colors.len(), 1);
    }
}
