//! CSS length literals.
//!
//! # Example
//!
//! ```
//! use horizon_lattice_tokens::convert::{parse_dimension, LengthValue};
//!
//! assert_eq!(parse_dimension("1rem"), Some(16.0));
//! assert_eq!(parse_dimension("16px"), Some(16.0));
//! assert_eq!(parse_dimension("12"), Some(12.0));
//! assert_eq!(LengthValue::parse("1.5em"), Some(LengthValue::Em(1.5)));
//! ```

use cssparser::{Parser, ParserInput, Token};

/// Pixels per `rem`/`em` unit.
pub const ROOT_FONT_SIZE: f32 = 16.0;

/// A length literal before it is resolved to pixels.
///
/// Unitless numbers are treated as pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LengthValue {
    /// Absolute pixels.
    Px(f32),
    /// Relative to the font size, resolved against the root size.
    Em(f32),
    /// Relative to the root font size.
    Rem(f32),
}

impl LengthValue {
    /// Tokenize a single length literal.
    ///
    /// Returns `None` for anything other than one number with an optional
    /// `px`, `em` or `rem` unit.
    pub fn parse(value: &str) -> Option<Self> {
        let mut input = ParserInput::new(value.trim());
        let mut parser = Parser::new(&mut input);

        let length = match parser.next().ok()? {
            Token::Number { value, .. } => LengthValue::Px(*value),
            Token::Dimension { value, unit, .. } => match unit.to_ascii_lowercase().as_str() {
                "px" => LengthValue::Px(*value),
                "em" => LengthValue::Em(*value),
                "rem" => LengthValue::Rem(*value),
                _ => return None,
            },
            _ => return None,
        };

        parser.is_exhausted().then_some(length)
    }

    /// Resolve to pixels; `em` has no parent context here and uses the root size.
    pub fn to_px(&self, root_font_size: f32) -> f32 {
        match self {
            LengthValue::Px(v) => *v,
            LengthValue::Em(v) | LengthValue::Rem(v) => v * root_font_size,
        }
    }
}

/// Parse a length literal to pixels using [`ROOT_FONT_SIZE`].
pub fn parse_dimension(value: &str) -> Option<f32> {
    parse_dimension_with_root(value, ROOT_FONT_SIZE)
}

/// Parse a length literal to pixels using an explicit root font size.
pub fn parse_dimension_with_root(value: &str, root_font_size: f32) -> Option<f32> {
    LengthValue::parse(value).map(|l| l.to_px(root_font_size))
}

/// Read the leading number of a value, ignoring whatever follows it.
///
/// Used for families that are numeric rather than lengths (font weights,
/// opacity, leading, skew). A percentage yields its written number, so
/// `"50%"` reads as `50.0`.
pub fn parse_number(value: &str) -> Option<f32> {
    let mut input = ParserInput::new(value.trim());
    let mut parser = Parser::new(&mut input);

    match parser.next().ok()? {
        Token::Number { value, .. } | Token::Dimension { value, .. } => Some(*value),
        Token::Percentage { unit_value, .. } => Some(unit_value * 100.0),
        _ => None,
    }
}
