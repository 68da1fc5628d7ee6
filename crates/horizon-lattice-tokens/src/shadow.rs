//! Multi-layer shadow decomposition.
//!
//! A shadow value such as
//! `0 1px 3px 0 rgb(0 0 0 / 0.1), inset 0 0 0 1px oklch(0.5 0.1 200)` is
//! split into layers at top-level commas, then each layer is read as
//! `[inset] <x> <y> [<blur> [<spread>]] [<color>]`.

use std::sync::LazyLock;

use regex::Regex;

use crate::convert::{ROOT_FONT_SIZE, parse_color, parse_dimension_with_root};
use crate::logging::targets;
use crate::types::{Color, ShadowKind, ShadowLayer};

/// Color used when a layer does not name one.
pub const DEFAULT_SHADOW_COLOR: Color = Color::new(0.0, 0.0, 0.0, 0.5);

static COLOR_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:rgba?|hsla?|oklch)\((?:[^()]|\([^()]*\))*\)")
        .expect("color function pattern")
});

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#[0-9A-Fa-f]{3,8}\b").expect("hex color pattern"));

/// Split a shadow list on commas that are not inside parentheses.
///
/// # Example
///
/// ```
/// use horizon_lattice_tokens::shadow::split_shadow_list;
///
/// let parts = split_shadow_list("0 1px 2px rgb(0,0,0,0.1), inset 0 0 0 1px oklch(0.5 0.1 200)");
/// assert_eq!(parts.len(), 2);
/// ```
pub fn split_shadow_list(value: &str) -> Vec<String> {
    let mut parts = vec![];
    let mut current = String::new();
    let mut depth = 0usize;

    for ch in value.chars() {
        match ch {
            '(' => {
                depth += 1;
                current.push(ch);
            }
            ')' => {
                depth = depth.saturating_sub(1);
                current.push(ch);
            }
            ',' if depth == 0 => {
                push_part(&mut parts, &current);
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    push_part(&mut parts, &current);

    parts
}

fn push_part(parts: &mut Vec<String>, part: &str) {
    let part = part.trim();
    if !part.is_empty() {
        parts.push(part.to_string());
    }
}

/// Parse one shadow layer.
///
/// Missing blur and spread default to `0`; a missing or unreadable color
/// defaults to [`DEFAULT_SHADOW_COLOR`]. Words that are neither lengths nor
/// colors are ignored and only the first four lengths are read. Returns
/// `None` when the layer lacks the two offsets.
pub fn parse_shadow_layer(part: &str) -> Option<ShadowLayer> {
    parse_layer(part, ROOT_FONT_SIZE)
}

/// Parse every layer of a shadow value, skipping unparseable layers.
///
/// `none` yields no layers.
pub fn parse_shadow(value: &str) -> Vec<ShadowLayer> {
    parse_shadow_with_root(value, ROOT_FONT_SIZE)
}

pub(crate) fn parse_shadow_with_root(value: &str, root_font_size: f32) -> Vec<ShadowLayer> {
    if value.trim().eq_ignore_ascii_case("none") {
        return Vec::new();
    }

    split_shadow_list(value)
        .iter()
        .filter_map(|part| {
            let layer = parse_layer(part, root_font_size);
            if layer.is_none() {
                tracing::debug!(target: targets::SHADOW, layer = %part, "skipping unparseable shadow layer");
            }
            layer
        })
        .collect()
}

fn parse_layer(part: &str, root_font_size: f32) -> Option<ShadowLayer> {
    let (color_text, rest) = match COLOR_FUNCTION
        .find(part)
        .or_else(|| HEX_COLOR.find(part))
    {
        Some(m) => (
            Some(m.as_str()),
            format!("{} {}", &part[..m.start()], &part[m.end()..]),
        ),
        None => (None, part.to_string()),
    };

    let mut color = match color_text {
        Some(text) => Some(parse_color(text).unwrap_or_else(|| {
            tracing::debug!(target: targets::SHADOW, color = text, "unparseable shadow color, using default");
            DEFAULT_SHADOW_COLOR
        })),
        None => None,
    };

    let mut inset = false;
    let mut lengths = Vec::with_capacity(4);

    for word in rest.split_whitespace() {
        if word.eq_ignore_ascii_case("inset") {
            inset = true;
        } else if let Some(px) = parse_dimension_with_root(word, root_font_size) {
            if lengths.len() < 4 {
                lengths.push(px);
            } else {
                tracing::trace!(target: targets::SHADOW, word, "ignoring extra shadow length");
            }
        } else if color.is_none()
            && let Some(named) = parse_color(word)
        {
            color = Some(named);
        } else {
            tracing::trace!(target: targets::SHADOW, word, "ignoring shadow word");
        }
    }

    if lengths.len() < 2 {
        return None;
    }
    let field = |i: usize| lengths.get(i).copied().unwrap_or(0.0);

    Some(ShadowLayer {
        kind: if inset {
            ShadowKind::InnerShadow
        } else {
            ShadowKind::DropShadow
        },
        x: field(0),
        y: field(1),
        blur: field(2),
        spread: field(3),
        color: color.unwrap_or(DEFAULT_SHADOW_COLOR),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_respects_nesting() {
        let parts =
            split_shadow_list("0 1px 2px rgb(0,0,0,0.1), inset 0 0 0 1px oklch(0.5 0.1 200)");
        assert_eq!(parts, vec!["0 1px 2px rgb(0,0,0,0.1)", "inset 0 0 0 1px oklch(0.5 0.1 200)"]);
    }

    #[test]
    fn split_ignores_empty_parts() {
        assert_eq!(split_shadow_list(" a , , b ,"), vec!["a", "b"]);
        assert!(split_shadow_list("").is_empty());
    }

    #[test]
    fn two_field_layer_defaults() {
        let layer = parse_shadow_layer("2px 4px oklch(0 0 0)").unwrap();
        assert_eq!((layer.x, layer.y, layer.blur, layer.spread), (2.0, 4.0, 0.0, 0.0));
        assert_eq!(layer.color, Color::BLACK);
        assert_eq!(layer.kind, ShadowKind::DropShadow);
    }

    #[test]
    fn inset_layer() {
        let layer = parse_shadow_layer("inset 0 2px 4px 0 rgb(0 0 0 / 0.05)").unwrap();
        assert!(layer.is_inset());
        assert_eq!(layer.kind, ShadowKind::InnerShadow);
        assert_eq!((layer.x, layer.y, layer.blur, layer.spread), (0.0, 2.0, 4.0, 0.0));
        assert_eq!(layer.color, Color::new(0.0, 0.0, 0.0, 0.05));
    }

    #[test]
    fn color_position_does_not_matter() {
        let before = parse_shadow_layer("rgb(255 0 0) 1px 2px 3px").unwrap();
        let after = parse_shadow_layer("1px 2px 3px rgb(255 0 0)").unwrap();
        assert_eq!(before, after);
        assert_eq!(after.color, Color::new(1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn hex_and_named_colors() {
        let layer = parse_shadow_layer("0 1px 1px #0000001a").unwrap();
        assert!((layer.color.a - 26.0 / 255.0).abs() < 1e-6);

        let layer = parse_shadow_layer("0 1px black").unwrap();
        assert_eq!(layer.color, Color::BLACK);
    }

    #[test]
    fn missing_color_uses_default() {
        let layer = parse_shadow_layer("0 0.25rem 0.5rem").unwrap();
        assert_eq!(layer.y, 4.0);
        assert_eq!(layer.blur, 8.0);
        assert_eq!(layer.color, DEFAULT_SHADOW_COLOR);
    }

    #[test]
    fn missing_offsets_are_absent() {
        assert!(parse_shadow_layer("1px").is_none());
        assert!(parse_shadow_layer("rgb(0 0 0)").is_none());
        assert!(parse_shadow_layer("inset wobbly").is_none());
    }

    #[test]
    fn unknown_words_are_ignored() {
        let layer = parse_shadow_layer("0 1px 2px var(--tw-shadow-color)").unwrap();
        assert_eq!((layer.x, layer.y, layer.blur, layer.spread), (0.0, 1.0, 2.0, 0.0));
        assert_eq!(layer.color, DEFAULT_SHADOW_COLOR);

        let layer = parse_shadow_layer("1px 2px wobbly").unwrap();
        assert_eq!((layer.x, layer.y), (1.0, 2.0));
    }

    #[test]
    fn nested_color_function_uses_default() {
        let layer = parse_shadow_layer("0 1px 2px hsl(var(--shadow) / 0.1)").unwrap();
        assert_eq!((layer.x, layer.y, layer.blur), (0.0, 1.0, 2.0));
        assert_eq!(layer.color, DEFAULT_SHADOW_COLOR);
    }

    #[test]
    fn extra_lengths_keep_first_four() {
        let layers = parse_shadow("0 1px 2px 3px 4px rgb(0 0 0)");
        assert_eq!(layers.len(), 1);
        let layer = layers[0];
        assert_eq!((layer.x, layer.y, layer.blur, layer.spread), (0.0, 1.0, 2.0, 3.0));
        assert_eq!(layer.color, Color::BLACK);
    }

    #[test]
    fn multi_layer_value() {
        let layers = parse_shadow(
            "0 1px 3px 0 rgb(0 0 0 / 0.1), 0 1px 2px -1px rgb(0 0 0 / 0.1)",
        );
        assert_eq!(layers.len(), 2);
        assert_eq!(layers[1].spread, -1.0);
    }

    #[test]
    fn none_and_garbage_yield_no_layers() {
        assert!(parse_shadow("none").is_empty());
        assert!(parse_shadow("var(--tw-shadow)").is_empty());
    }
}
