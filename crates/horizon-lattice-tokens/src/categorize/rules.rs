//! The ordered classification rules.
//!
//! Rules are evaluated top to bottom and the first rule whose predicate
//! accepts a name claims it. A claimed name whose value fails to parse is
//! dropped; it is never offered to a later rule.

use crate::convert::{parse_color, parse_dimension_with_root, parse_number};
use crate::logging::targets;
use crate::shadow::parse_shadow_with_root;
use crate::types::{ColorToken, FloatFamily, FloatToken, FontToken, ShadowToken, split_path};

use super::Context;
use super::typography;

/// One classification rule.
pub struct Rule {
    /// Short identifier, used in logs and by [`classify`].
    pub name: &'static str,
    /// Predicate over the variable name without its leading `--`.
    pub matches: fn(&str) -> bool,
    apply: fn(&mut Context<'_>, &str, &str),
}

impl Rule {
    pub(crate) fn apply(&self, ctx: &mut Context<'_>, name: &str, value: &str) {
        (self.apply)(ctx, name, value)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

/// The rule table, in precedence order.
///
/// Exclusions worth knowing when reading the table:
///
/// - `shadow` skips `shadow-inner`.
/// - `text` skips shadows and the `--line-height`, `--letter-spacing` and
///   `--font-weight` modifiers, which are folded into their size.
/// - `font` skips `font-weight*` and any name containing `--`, so modifiers
///   like `font-sans--font-feature-settings` are not font families.
pub static RULES: &[Rule] = &[
    Rule { name: "color", matches: is_color, apply: apply_color },
    Rule { name: "spacing", matches: is_spacing, apply: apply_spacing },
    Rule { name: "breakpoint", matches: is_breakpoint, apply: apply_breakpoint },
    Rule { name: "container", matches: is_container, apply: apply_container },
    Rule { name: "max-width", matches: is_max_width, apply: apply_max_width },
    Rule { name: "font-weight", matches: is_font_weight, apply: apply_font_weight },
    Rule { name: "tracking", matches: is_tracking, apply: apply_tracking },
    Rule { name: "leading", matches: is_leading, apply: apply_leading },
    Rule { name: "radius", matches: is_radius, apply: apply_radius },
    Rule { name: "inset-shadow", matches: is_inset_shadow, apply: apply_inset_shadow },
    Rule { name: "drop-shadow", matches: is_drop_shadow, apply: apply_drop_shadow },
    Rule { name: "text-shadow", matches: is_text_shadow, apply: apply_text_shadow },
    Rule { name: "shadow", matches: is_shadow, apply: apply_shadow },
    Rule { name: "blur", matches: is_blur, apply: apply_blur },
    Rule { name: "backdrop-blur", matches: is_backdrop_blur, apply: apply_backdrop_blur },
    Rule { name: "text", matches: typography::is_text_size, apply: typography::apply },
    Rule { name: "font", matches: is_font, apply: apply_font },
    Rule { name: "opacity", matches: is_opacity, apply: apply_opacity },
    Rule { name: "border-width", matches: is_border_width, apply: apply_border_width },
    Rule { name: "skew", matches: is_skew, apply: apply_skew },
];

/// Find the rule that claims a variable name.
///
/// The leading `--` is optional.
pub fn rule_for(name: &str) -> Option<&'static Rule> {
    let name = name.strip_prefix("--").unwrap_or(name);
    RULES.iter().find(|rule| (rule.matches)(name))
}

/// Name of the rule that claims a variable name, if any.
///
/// ```
/// use horizon_lattice_tokens::categorize::classify;
///
/// assert_eq!(classify("--shadow-sm"), Some("shadow"));
/// assert_eq!(classify("--shadow-inner"), None);
/// assert_eq!(classify("--font-weight-bold"), Some("font-weight"));
/// ```
pub fn classify(name: &str) -> Option<&'static str> {
    rule_for(name).map(|rule| rule.name)
}

fn rest<'a>(name: &'a str, prefix: &str) -> &'a str {
    name.strip_prefix(prefix).unwrap_or("")
}

fn bare_or_path(name: &str, bare: &str) -> Vec<String> {
    if name == bare {
        vec!["default".to_string()]
    } else {
        split_path(rest(name, &format!("{bare}-")))
    }
}

fn skip(name: &str, value: &str, reason: &str) {
    tracing::debug!(target: targets::CATEGORIZE, name, value, reason, "skipping declaration");
}

fn push_dimension(ctx: &mut Context<'_>, family: FloatFamily, path: Vec<String>, name: &str, value: &str) {
    if path.is_empty() {
        return skip(name, value, "empty path");
    }
    match parse_dimension_with_root(value, ctx.root_font_size) {
        Some(px) => ctx.tokens.insert_float(family, FloatToken::new(path, px, value)),
        None => skip(name, value, "not a dimension"),
    }
}

fn push_number(ctx: &mut Context<'_>, family: FloatFamily, path: Vec<String>, name: &str, value: &str) {
    if path.is_empty() {
        return skip(name, value, "empty path");
    }
    match parse_number(value) {
        Some(n) => ctx.tokens.insert_float(family, FloatToken::new(path, n, value)),
        None => skip(name, value, "not a number"),
    }
}

fn push_shadow(ctx: &mut Context<'_>, namespace: &str, rest: &str, name: &str, value: &str) {
    if rest.is_empty() {
        return skip(name, value, "empty path");
    }
    let layers = parse_shadow_with_root(value, ctx.root_font_size);
    if layers.is_empty() {
        return skip(name, value, "no shadow layers");
    }
    ctx.tokens.insert_shadow(ShadowToken {
        name: format!("{namespace}/{rest}"),
        layers,
        raw_value: value.to_string(),
    });
}

fn is_color(name: &str) -> bool {
    name.starts_with("color-")
}

fn apply_color(ctx: &mut Context<'_>, name: &str, value: &str) {
    let path = split_path(rest(name, "color-"));
    if path.is_empty() {
        return skip(name, value, "empty path");
    }
    match parse_color(value) {
        Some(color) => ctx.tokens.insert_color(ColorToken {
            path,
            color,
            raw_value: value.to_string(),
        }),
        None => skip(name, value, "not a color"),
    }
}

fn is_spacing(name: &str) -> bool {
    name == "spacing"
}

fn apply_spacing(ctx: &mut Context<'_>, name: &str, value: &str) {
    push_dimension(ctx, FloatFamily::Spacing, vec!["base".to_string()], name, value);
}

fn is_breakpoint(name: &str) -> bool {
    name.starts_with("breakpoint-")
}

fn apply_breakpoint(ctx: &mut Context<'_>, name: &str, value: &str) {
    let path = split_path(rest(name, "breakpoint-"));
    push_dimension(ctx, FloatFamily::Breakpoints, path, name, value);
}

fn is_container(name: &str) -> bool {
    name.starts_with("container-")
}

fn apply_container(ctx: &mut Context<'_>, name: &str, value: &str) {
    let path = split_path(rest(name, "container-"));
    push_dimension(ctx, FloatFamily::Containers, path, name, value);
}

fn is_max_width(name: &str) -> bool {
    name.starts_with("max-w-") || name.starts_with("max-width-")
}

fn apply_max_width(ctx: &mut Context<'_>, name: &str, value: &str) {
    let suffix = name
        .strip_prefix("max-width-")
        .or_else(|| name.strip_prefix("max-w-"))
        .unwrap_or("");
    push_dimension(ctx, FloatFamily::MaxWidth, split_path(suffix), name, value);
}

fn is_font_weight(name: &str) -> bool {
    name.starts_with("font-weight-")
}

fn apply_font_weight(ctx: &mut Context<'_>, name: &str, value: &str) {
    let path = split_path(rest(name, "font-weight-"));
    push_number(ctx, FloatFamily::FontWeights, path, name, value);
}

fn is_tracking(name: &str) -> bool {
    name.starts_with("tracking-")
}

fn apply_tracking(ctx: &mut Context<'_>, name: &str, value: &str) {
    let path = split_path(rest(name, "tracking-"));
    push_dimension(ctx, FloatFamily::Tracking, path, name, value);
}

fn is_leading(name: &str) -> bool {
    name.starts_with("leading-")
}

fn apply_leading(ctx: &mut Context<'_>, name: &str, value: &str) {
    let path = split_path(rest(name, "leading-"));
    push_number(ctx, FloatFamily::Leading, path, name, value);
}

fn is_radius(name: &str) -> bool {
    name == "radius" || name.starts_with("radius-")
}

fn apply_radius(ctx: &mut Context<'_>, name: &str, value: &str) {
    let path = bare_or_path(name, "radius");
    push_dimension(ctx, FloatFamily::Radius, path, name, value);
}

fn is_inset_shadow(name: &str) -> bool {
    name.starts_with("inset-shadow-")
}

fn apply_inset_shadow(ctx: &mut Context<'_>, name: &str, value: &str) {
    push_shadow(ctx, "inset-shadow", rest(name, "inset-shadow-"), name, value);
}

fn is_drop_shadow(name: &str) -> bool {
    name.starts_with("drop-shadow-")
}

fn apply_drop_shadow(ctx: &mut Context<'_>, name: &str, value: &str) {
    push_shadow(ctx, "drop-shadow", rest(name, "drop-shadow-"), name, value);
}

fn is_text_shadow(name: &str) -> bool {
    name.starts_with("text-shadow-")
}

fn apply_text_shadow(ctx: &mut Context<'_>, name: &str, value: &str) {
    push_shadow(ctx, "text-shadow", rest(name, "text-shadow-"), name, value);
}

fn is_shadow(name: &str) -> bool {
    name.starts_with("shadow-") && name != "shadow-inner"
}

fn apply_shadow(ctx: &mut Context<'_>, name: &str, value: &str) {
    push_shadow(ctx, "drop-shadow", rest(name, "shadow-"), name, value);
}

fn is_blur(name: &str) -> bool {
    name == "blur" || name.starts_with("blur-")
}

fn apply_blur(ctx: &mut Context<'_>, name: &str, value: &str) {
    let path = bare_or_path(name, "blur");
    push_dimension(ctx, FloatFamily::Blur, path, name, value);
}

fn is_backdrop_blur(name: &str) -> bool {
    name == "backdrop-blur" || name.starts_with("backdrop-blur-")
}

fn apply_backdrop_blur(ctx: &mut Context<'_>, name: &str, value: &str) {
    let path = bare_or_path(name, "backdrop-blur");
    push_dimension(ctx, FloatFamily::BackdropBlur, path, name, value);
}

// Modifiers such as `--font-sans--font-feature-settings` are not families.
fn is_font(name: &str) -> bool {
    name.starts_with("font-") && !name.starts_with("font-weight") && !name.contains("--")
}

fn apply_font(ctx: &mut Context<'_>, name: &str, value: &str) {
    let font_name = rest(name, "font-");
    let family = value
        .split(',')
        .next()
        .unwrap_or("")
        .trim()
        .trim_matches(|c: char| c == '"' || c == '\'')
        .trim();

    if font_name.is_empty() || family.is_empty() {
        return skip(name, value, "empty font family");
    }
    ctx.tokens.insert_font(FontToken {
        name: font_name.to_string(),
        family: family.to_string(),
    });
}

fn is_opacity(name: &str) -> bool {
    name.starts_with("opacity-")
}

fn apply_opacity(ctx: &mut Context<'_>, name: &str, value: &str) {
    let path = split_path(rest(name, "opacity-"));
    if path.is_empty() {
        return skip(name, value, "empty path");
    }
    match parse_number(value) {
        Some(n) => {
            let n = if value.trim_end().ends_with('%') { n / 100.0 } else { n };
            ctx.tokens
                .insert_float(FloatFamily::Opacity, FloatToken::new(path, n, value));
        }
        None => skip(name, value, "not a number"),
    }
}

fn is_border_width(name: &str) -> bool {
    name.starts_with("border-width-")
}

fn apply_border_width(ctx: &mut Context<'_>, name: &str, value: &str) {
    let path = split_path(rest(name, "border-width-"));
    push_dimension(ctx, FloatFamily::BorderWidth, path, name, value);
}

fn is_skew(name: &str) -> bool {
    name.starts_with("skew-")
}

fn apply_skew(ctx: &mut Context<'_>, name: &str, value: &str) {
    let path = split_path(rest(name, "skew-"));
    push_number(ctx, FloatFamily::Skew, path, name, value);
}
