//! Flat JSON token sources.
//!
//! Theme exports arrive as one flat object keyed by token path:
//!
//! ```json
//! {
//!   "colors/primary": { "Light": "#0f172a", "Dark": "#f8fafc" },
//!   "colors/muted": { "Light": "hsl(210 40% 96%)" },
//!   "font-sans": "Inter",
//!   "heading": { "size": "2rem", "weight": 700 },
//!   "radius/md": "0.375rem"
//! }
//! ```
//!
//! Bare strings and typography composites (objects with a `size` field) are
//! left to other consumers.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::convert::{ROOT_FONT_SIZE, parse_color, parse_dimension_with_root};
use crate::extract::VariableMap;
use crate::logging::targets;
use crate::types::ColorToken;

const LIGHT: &str = "Light";
const DARK: &str = "Dark";

/// Light and dark raw values keyed by token name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemedValues {
    pub light: VariableMap,
    pub dark: VariableMap,
}

/// A numeric token resolved for both modes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloatPair {
    /// Key with the prefix and its `/` removed.
    pub name: String,
    pub light: f32,
    pub dark: f32,
}

/// Color tokens for each mode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModeColors {
    pub light: Vec<ColorToken>,
    pub dark: Vec<ColorToken>,
}

impl ModeColors {
    /// Total number of tokens across both modes.
    pub fn len(&self) -> usize {
        self.light.len() + self.dark.len()
    }

    /// Check if neither mode holds a token.
    pub fn is_empty(&self) -> bool {
        self.light.is_empty() && self.dark.is_empty()
    }
}

/// Collect the `Light`/`Dark` string values of every themed entry.
///
/// When `prefix` is given, a leading `prefix/` is removed from keys that
/// carry it; other keys are kept as-is. Non-object values and objects with
/// a `size` field are skipped. Non-object input yields empty maps.
pub fn normalize_json(data: &Value, prefix: Option<&str>) -> ThemedValues {
    let mut themed = ThemedValues::default();
    let Some(entries) = data.as_object() else {
        tracing::debug!(target: targets::JSON, "token source is not an object");
        return themed;
    };

    for (key, value) in entries {
        let Some(modes) = value.as_object() else {
            tracing::trace!(target: targets::JSON, key = %key, "skipping unthemed value");
            continue;
        };
        if modes.contains_key("size") {
            tracing::trace!(target: targets::JSON, key = %key, "skipping typography composite");
            continue;
        }

        let name = strip_prefix(key, prefix);
        if let Some(light) = modes.get(LIGHT).and_then(Value::as_str) {
            themed.light.set(name, light);
        }
        if let Some(dark) = modes.get(DARK).and_then(Value::as_str) {
            themed.dark.set(name, dark);
        }
    }

    themed
}

/// Extract numeric tokens whose key starts with `prefix/`.
///
/// Values may be a `{Light, Dark}` object, a dimension string or a JSON
/// number. A one-sided object uses its only value for both modes.
///
/// # Example
///
/// ```
/// use horizon_lattice_tokens::json::extract_json_floats;
/// use serde_json::json;
///
/// let data = json!({
///     "radius/sm": "4px",
///     "radius/lg": { "Light": "0.5rem", "Dark": "1rem" },
///     "colors/red": "#f00",
/// });
/// let floats = extract_json_floats(&data, "radius");
///
/// assert_eq!(floats.len(), 2);
/// assert_eq!(floats[1].name, "lg");
/// assert_eq!((floats[1].light, floats[1].dark), (8.0, 16.0));
/// ```
pub fn extract_json_floats(data: &Value, prefix: &str) -> Vec<FloatPair> {
    extract_json_floats_with_root(data, prefix, ROOT_FONT_SIZE)
}

pub(crate) fn extract_json_floats_with_root(
    data: &Value,
    prefix: &str,
    root_font_size: f32,
) -> Vec<FloatPair> {
    let Some(entries) = data.as_object() else {
        return Vec::new();
    };
    let namespace = format!("{}/", prefix.trim_end_matches('/'));

    entries
        .iter()
        .filter_map(|(key, value)| {
            let name = key.strip_prefix(&namespace)?;
            let pair = float_pair(name, value, root_font_size);
            if pair.is_none() {
                tracing::debug!(target: targets::JSON, key = %key, "skipping non-numeric value");
            }
            pair
        })
        .collect()
}

fn float_pair(name: &str, value: &Value, root_font_size: f32) -> Option<FloatPair> {
    let (light, dark) = match value {
        Value::Object(modes) => {
            let light = mode_float(modes, LIGHT, root_font_size);
            let dark = mode_float(modes, DARK, root_font_size);
            match (light, dark) {
                (Some(l), Some(d)) => (l, d),
                (Some(v), None) | (None, Some(v)) => (v, v),
                (None, None) => return None,
            }
        }
        other => {
            let v = json_float(other, root_font_size)?;
            (v, v)
        }
    };

    Some(FloatPair {
        name: name.to_string(),
        light,
        dark,
    })
}

fn mode_float(modes: &Map<String, Value>, mode: &str, root_font_size: f32) -> Option<f32> {
    modes.get(mode).and_then(|v| json_float(v, root_font_size))
}

fn json_float(value: &Value, root_font_size: f32) -> Option<f32> {
    match value {
        Value::String(s) => parse_dimension_with_root(s, root_font_size),
        Value::Number(n) => n.as_f64().map(|v| v as f32),
        _ => None,
    }
}

/// Convert the themed color entries into color tokens for each mode.
///
/// Token paths are the normalized keys split on `/`. Values that are not
/// colors are skipped.
pub fn json_color_tokens(data: &Value, prefix: Option<&str>) -> ModeColors {
    let themed = normalize_json(data, prefix);
    ModeColors {
        light: color_tokens(&themed.light),
        dark: color_tokens(&themed.dark),
    }
}

fn color_tokens(values: &VariableMap) -> Vec<ColorToken> {
    values
        .iter()
        .filter_map(|(name, raw)| {
            let Some(color) = parse_color(raw) else {
                tracing::debug!(target: targets::JSON, name, value = raw, "skipping non-color value");
                return None;
            };
            Some(ColorToken {
                path: name
                    .split('/')
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect(),
                color,
                raw_value: raw.to_string(),
            })
        })
        .collect()
}

fn strip_prefix<'a>(key: &'a str, prefix: Option<&str>) -> &'a str {
    prefix
        .and_then(|p| {
            key.strip_prefix(p.trim_end_matches('/'))
                .and_then(|rest| rest.strip_prefix('/'))
        })
        .unwrap_or(key)
}
