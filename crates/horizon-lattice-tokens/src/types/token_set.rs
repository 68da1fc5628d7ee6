//! The categorized output of one parse invocation.

use serde::{Deserialize, Serialize};

use super::token::{ColorToken, FloatToken, FontToken, ShadowToken, TokenKey, TypographyToken};

/// Every token family produced by the categorizer, each in source order.
///
/// Within a family a later token with the same path (or name) replaces the
/// earlier one in place, so every family holds unique keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TokenSet {
    pub colors: Vec<ColorToken>,
    pub spacing: Vec<FloatToken>,
    pub radius: Vec<FloatToken>,
    pub shadows: Vec<ShadowToken>,
    pub blur: Vec<FloatToken>,
    pub backdrop_blur: Vec<FloatToken>,
    pub typography: Vec<TypographyToken>,
    pub opacity: Vec<FloatToken>,
    pub fonts: Vec<FontToken>,
    pub breakpoints: Vec<FloatToken>,
    pub containers: Vec<FloatToken>,
    pub font_weights: Vec<FloatToken>,
    pub tracking: Vec<FloatToken>,
    pub leading: Vec<FloatToken>,
    pub border_width: Vec<FloatToken>,
    pub max_width: Vec<FloatToken>,
    pub skew: Vec<FloatToken>,
}

/// Identifies one float-valued family of a [`TokenSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatFamily {
    Spacing,
    Radius,
    Blur,
    BackdropBlur,
    Opacity,
    Breakpoints,
    Containers,
    FontWeights,
    Tracking,
    Leading,
    BorderWidth,
    MaxWidth,
    Skew,
}

impl TokenSet {
    /// Create an empty token set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mutable access to a float family.
    pub fn float_family_mut(&mut self, family: FloatFamily) -> &mut Vec<FloatToken> {
        match family {
            FloatFamily::Spacing => &mut self.spacing,
            FloatFamily::Radius => &mut self.radius,
            FloatFamily::Blur => &mut self.blur,
            FloatFamily::BackdropBlur => &mut self.backdrop_blur,
            FloatFamily::Opacity => &mut self.opacity,
            FloatFamily::Breakpoints => &mut self.breakpoints,
            FloatFamily::Containers => &mut self.containers,
            FloatFamily::FontWeights => &mut self.font_weights,
            FloatFamily::Tracking => &mut self.tracking,
            FloatFamily::Leading => &mut self.leading,
            FloatFamily::BorderWidth => &mut self.border_width,
            FloatFamily::MaxWidth => &mut self.max_width,
            FloatFamily::Skew => &mut self.skew,
        }
    }

    /// Shared access to a float family.
    pub fn float_family(&self, family: FloatFamily) -> &[FloatToken] {
        match family {
            FloatFamily::Spacing => &self.spacing,
            FloatFamily::Radius => &self.radius,
            FloatFamily::Blur => &self.blur,
            FloatFamily::BackdropBlur => &self.backdrop_blur,
            FloatFamily::Opacity => &self.opacity,
            FloatFamily::Breakpoints => &self.breakpoints,
            FloatFamily::Containers => &self.containers,
            FloatFamily::FontWeights => &self.font_weights,
            FloatFamily::Tracking => &self.tracking,
            FloatFamily::Leading => &self.leading,
            FloatFamily::BorderWidth => &self.border_width,
            FloatFamily::MaxWidth => &self.max_width,
            FloatFamily::Skew => &self.skew,
        }
    }

    pub fn insert_color(&mut self, token: ColorToken) {
        upsert(&mut self.colors, token);
    }

    pub fn insert_float(&mut self, family: FloatFamily, token: FloatToken) {
        upsert(self.float_family_mut(family), token);
    }

    pub fn insert_shadow(&mut self, token: ShadowToken) {
        upsert(&mut self.shadows, token);
    }

    pub fn insert_typography(&mut self, token: TypographyToken) {
        upsert(&mut self.typography, token);
    }

    pub fn insert_font(&mut self, token: FontToken) {
        upsert(&mut self.fonts, token);
    }

    /// Total number of tokens across all families.
    pub fn len(&self) -> usize {
        self.colors.len()
            + self.shadows.len()
            + self.typography.len()
            + self.fonts.len()
            + FloatFamily::ALL
                .iter()
                .map(|f| self.float_family(*f).len())
                .sum::<usize>()
    }

    /// Check whether no family holds any token.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Find a color by its path segments.
    pub fn color(&self, path: &[&str]) -> Option<&ColorToken> {
        self.colors.iter().find(|t| t.path == path)
    }

    /// Find a float token by family and path segments.
    pub fn float(&self, family: FloatFamily, path: &[&str]) -> Option<&FloatToken> {
        self.float_family(family).iter().find(|t| t.path == path)
    }
}

impl FloatFamily {
    pub const ALL: [FloatFamily; 13] = [
        FloatFamily::Spacing,
        FloatFamily::Radius,
        FloatFamily::Blur,
        FloatFamily::BackdropBlur,
        FloatFamily::Opacity,
        FloatFamily::Breakpoints,
        FloatFamily::Containers,
        FloatFamily::FontWeights,
        FloatFamily::Tracking,
        FloatFamily::Leading,
        FloatFamily::BorderWidth,
        FloatFamily::MaxWidth,
        FloatFamily::Skew,
    ];
}

fn upsert<T: TokenKey>(family: &mut Vec<T>, token: T) {
    match family.iter_mut().find(|existing| existing.same_key(&token)) {
        Some(existing) => *existing = token,
        None => family.push(token),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    fn color(path: &[&str], c: Color) -> ColorToken {
        ColorToken {
            path: path.iter().map(|s| s.to_string()).collect(),
            color: c,
            raw_value: String::new(),
        }
    }

    #[test]
    fn duplicate_path_replaces_in_place() {
        let mut set = TokenSet::new();
        set.insert_color(color(&["red", "500"], Color::BLACK));
        set.insert_color(color(&["blue", "500"], Color::BLACK));
        set.insert_color(color(&["red", "500"], Color::WHITE));

        assert_eq!(set.colors.len(), 2);
        assert_eq!(set.colors[0].path, vec!["red", "500"]);
        assert_eq!(set.colors[0].color, Color::WHITE);
    }

    #[test]
    fn len_counts_every_family() {
        let mut set = TokenSet::new();
        assert!(set.is_empty());

        set.insert_color(color(&["red"], Color::BLACK));
        set.insert_float(FloatFamily::Radius, FloatToken::new(vec!["sm".into()], 4.0, "4px"));
        set.insert_float(FloatFamily::Skew, FloatToken::new(vec!["3".into()], 3.0, "3deg"));

        assert_eq!(set.len(), 3);
        assert_eq!(set.float(FloatFamily::Radius, &["sm"]).map(|t| t.value), Some(4.0));
    }
}
