//! Raw and categorized token types.

use serde::{Deserialize, Serialize};

use super::Color;

/// A custom-property declaration as it appeared in the source.
///
/// The name keeps its leading `--`; the value is trimmed with internal
/// whitespace runs collapsed to single spaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawVariable {
    pub name: String,
    pub raw_value: String,
}

impl RawVariable {
    /// Create a raw variable.
    pub fn new(name: impl Into<String>, raw_value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw_value: raw_value.into(),
        }
    }

    /// The name without its leading `--`.
    pub fn bare_name(&self) -> &str {
        self.name.strip_prefix("--").unwrap_or(&self.name)
    }
}

/// Split a hyphenated token name into path segments, dropping empty ones.
pub fn split_path(name: &str) -> Vec<String> {
    name.split('-')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// A color token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorToken {
    pub path: Vec<String>,
    pub color: Color,
    pub raw_value: String,
}

/// A numeric token whose value is already resolved to px, degrees or a
/// unitless ratio, depending on its family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloatToken {
    pub path: Vec<String>,
    pub value: f32,
    pub raw_value: String,
}

impl FloatToken {
    /// Create a float token.
    pub fn new(path: Vec<String>, value: f32, raw_value: impl Into<String>) -> Self {
        Self {
            path,
            value,
            raw_value: raw_value.into(),
        }
    }

    /// The path joined with `/`, the form used by variable sinks.
    pub fn name(&self) -> String {
        self.path.join("/")
    }
}

/// Whether a shadow layer is drawn outside or inside the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShadowKind {
    #[default]
    DropShadow,
    InnerShadow,
}

/// One layer of a (possibly multi-layer) shadow value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShadowLayer {
    pub kind: ShadowKind,
    pub x: f32,
    pub y: f32,
    pub blur: f32,
    pub spread: f32,
    pub color: Color,
}

impl ShadowLayer {
    /// Check if this layer is an inset shadow.
    #[inline]
    pub fn is_inset(&self) -> bool {
        self.kind == ShadowKind::InnerShadow
    }
}

/// A named shadow, e.g. `drop-shadow/sm`, with its layers in source order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShadowToken {
    pub name: String,
    pub layers: Vec<ShadowLayer>,
    pub raw_value: String,
}

/// A typography composite assembled from `--text-*` and its modifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypographyToken {
    pub name: String,
    /// Font size in px.
    pub font_size: f32,
    /// Line height in px, or an unresolved ratio when below
    /// [`LINE_HEIGHT_RATIO_LIMIT`](Self::LINE_HEIGHT_RATIO_LIMIT).
    pub line_height: Option<f32>,
    /// Letter spacing in px.
    pub letter_spacing: Option<f32>,
    pub font_weight: Option<f32>,
    pub raw_value: String,
}

impl TypographyToken {
    /// Line-height values below this are ratios of the font size.
    pub const LINE_HEIGHT_RATIO_LIMIT: f32 = 4.0;

    /// Create a typography token with only a font size.
    pub fn new(name: impl Into<String>, font_size: f32, raw_value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            font_size,
            line_height: None,
            letter_spacing: None,
            font_weight: None,
            raw_value: raw_value.into(),
        }
    }

    /// Resolve the line height to px, multiplying ratios by the font size.
    pub fn line_height_px(&self) -> Option<f32> {
        self.line_height.map(|lh| {
            if lh < Self::LINE_HEIGHT_RATIO_LIMIT {
                lh * self.font_size
            } else {
                lh
            }
        })
    }
}

/// A font family token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontToken {
    pub name: String,
    pub family: String,
}

/// Identity used when the same token is registered twice in one family.
pub(crate) trait TokenKey {
    fn same_key(&self, other: &Self) -> bool;
}

impl TokenKey for ColorToken {
    fn same_key(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl TokenKey for FloatToken {
    fn same_key(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl TokenKey for ShadowToken {
    fn same_key(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl TokenKey for TypographyToken {
    fn same_key(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl TokenKey for FontToken {
    fn same_key(&self, other: &Self) -> bool {
        self.name == other.name
    }
}
