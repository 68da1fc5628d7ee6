//! Typography composites: `--text-<size>` plus its modifiers.
//!
//! Tailwind spreads one text style over several declarations:
//!
//! ```css
//! --text-sm: 0.875rem;
//! --text-sm--line-height: calc(1.25 / 0.875);
//! --text-sm--letter-spacing: 0.01em;
//! --text-sm--font-weight: 500;
//! ```
//!
//! The size declaration claims the token; modifiers are looked up by name
//! and folded into the same [`TypographyToken`]. When a theme redeclares a
//! size or a modifier, the last declaration of each one is used.

use std::sync::LazyLock;

use regex::Regex;

use crate::convert::{parse_dimension_with_root, parse_number};
use crate::logging::targets;
use crate::types::TypographyToken;

use super::Context;

const LINE_HEIGHT: &str = "--line-height";
const LETTER_SPACING: &str = "--letter-spacing";
const FONT_WEIGHT: &str = "--font-weight";

static CALC_RATIO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^calc\(\s*([-+]?(?:\d+\.?\d*|\.\d+))\s*/\s*([-+]?(?:\d+\.?\d*|\.\d+))\s*\)$")
        .expect("calc ratio pattern")
});

pub(super) fn is_text_size(name: &str) -> bool {
    name.starts_with("text-")
        && !name.contains("shadow")
        && ![LINE_HEIGHT, LETTER_SPACING, FONT_WEIGHT]
            .iter()
            .any(|suffix| name.ends_with(suffix))
}

pub(super) fn apply(ctx: &mut Context<'_>, name: &str, value: &str) {
    let size = name.strip_prefix("text-").unwrap_or("");
    if size.is_empty() {
        tracing::debug!(target: targets::CATEGORIZE, name, "empty text size");
        return;
    }

    let Some(font_size) = parse_dimension_with_root(value, ctx.root_font_size) else {
        tracing::debug!(target: targets::CATEGORIZE, name, value, "font size is not a dimension");
        return;
    };

    let siblings = ctx.siblings;
    let modifier = |suffix: &str| siblings.get(&format!("{name}{suffix}"));

    let mut token = TypographyToken::new(size, font_size, value);
    token.line_height = modifier(LINE_HEIGHT).and_then(|v| parse_line_height(v, ctx.root_font_size));
    token.letter_spacing =
        modifier(LETTER_SPACING).and_then(|v| parse_dimension_with_root(v, ctx.root_font_size));
    token.font_weight = modifier(FONT_WEIGHT).and_then(parse_number);

    ctx.tokens.insert_typography(token);
}

/// Read a line-height modifier.
///
/// `calc(A / B)` evaluates to the unitless ratio `A / B`; anything else is
/// read as a length. Non-numeric values are absent.
pub fn parse_line_height(value: &str, root_font_size: f32) -> Option<f32> {
    let value = value.trim();

    if let Some(caps) = CALC_RATIO.captures(value) {
        let numerator: f32 = caps[1].parse().ok()?;
        let denominator: f32 = caps[2].parse().ok()?;
        if denominator == 0.0 {
            return None;
        }
        return Some(numerator / denominator);
    }

    parse_dimension_with_root(value, root_font_size)
}
