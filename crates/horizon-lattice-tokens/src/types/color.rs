//! Canonical color value.

use serde::{Deserialize, Serialize};

/// Default per-channel tolerance used by [`Color`] equality.
pub const COLOR_TOLERANCE: f32 = 0.005;

/// A straight-alpha RGBA color with every channel in `0.0..=1.0`.
///
/// This is the only color representation that leaves the crate. Equality is
/// tolerance-based: two colors compare equal when every channel differs by
/// less than [`COLOR_TOLERANCE`], since oklch conversion and percentage
/// parsing both introduce floating-point noise.
///
/// # Example
///
/// ```
/// use horizon_lattice_tokens::prelude::Color;
///
/// let white = Color::from_hex("#fff").unwrap();
/// assert_eq!(white, Color::WHITE);
/// assert_eq!(white.to_hex(), "#FFFFFF");
/// ```
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Create a color from raw channels without clamping.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color, clamping every channel into `0.0..=1.0`.
    ///
    /// NaN channels collapse to zero.
    #[inline]
    pub fn clamped(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: clamp_unit(r),
            g: clamp_unit(g),
            b: clamp_unit(b),
            a: clamp_unit(a),
        }
    }

    /// Create a color from 8-bit RGBA components.
    #[inline]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Create a color from a hex string.
    ///
    /// Accepts 3, 4, 6 or 8 hex digits with an optional leading `#`. The
    /// short forms are expanded by digit duplication; alpha is only read from
    /// the 4 and 8 digit forms.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        let expanded: String = match hex.len() {
            3 | 4 => hex.chars().flat_map(|c| [c, c]).collect(),
            6 | 8 => hex.to_string(),
            _ => return None,
        };

        let r = u8::from_str_radix(&expanded[0..2], 16).ok()?;
        let g = u8::from_str_radix(&expanded[2..4], 16).ok()?;
        let b = u8::from_str_radix(&expanded[4..6], 16).ok()?;
        let a = if expanded.len() == 8 {
            u8::from_str_radix(&expanded[6..8], 16).ok()?
        } else {
            255
        };

        Some(Self::from_rgba8(r, g, b, a))
    }

    /// Compare two colors with an explicit per-channel tolerance.
    pub fn approx_eq(&self, other: &Self, tolerance: f32) -> bool {
        (self.r - other.r).abs() < tolerance
            && (self.g - other.g).abs() < tolerance
            && (self.b - other.b).abs() < tolerance
            && (self.a - other.a).abs() < tolerance
    }

    /// Check whether the color is fully opaque.
    #[inline]
    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }

    /// Format as `#RRGGBB`, or `#RRGGBBAA` when the color is translucent.
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("#{:02X}{:02X}{:02X}", r, g, b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
        }
    }

    /// Format as a CSS `rgba(r, g, b, a)` string with 8-bit channels.
    pub fn to_css_rgba(&self) -> String {
        let [r, g, b, _] = self.to_rgba8();
        format!("rgba({}, {}, {}, {})", r, g, b, round_to(self.a, 3))
    }

    /// Quantize to 8-bit channels.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let q = |v: f32| (clamp_unit(v) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other, COLOR_TOLERANCE)
    }
}

pub(crate) fn clamp_unit(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

fn round_to(v: f32, places: i32) -> f32 {
    let factor = 10f32.powi(places);
    (v * factor).round() / factor
}
