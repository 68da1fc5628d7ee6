//! CSS color values to canonical [`Color`].
//!
//! Supported notations:
//!
//! - `oklch(L C H [/ A])`
//! - `hsl(H, S%, L%[, A])` and `hsla(...)`, comma or space separated
//! - `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`
//! - `rgb(...)` and `rgba(...)`, comma or space separated, alpha after `,` or `/`
//! - `black`, `white`, `transparent`
//!
//! Out-of-gamut results are clamped into sRGB, never rejected.

use cssparser::{ParseError as CssParseError, Parser, ParserInput, Token};

use crate::types::Color;

/// Chroma that a `100%` oklch chroma percentage stands for.
const OKLCH_CHROMA_PERCENT_REF: f32 = 0.4;

/// Parse any supported color notation.
///
/// Returns `None` when the value is not a color; callers skip the
/// declaration in that case.
///
/// # Example
///
/// ```
/// use horizon_lattice_tokens::convert::parse_color;
/// use horizon_lattice_tokens::prelude::Color;
///
/// assert_eq!(parse_color("rgba(255, 0, 0, 50%)"), Some(Color::new(1.0, 0.0, 0.0, 0.5)));
/// assert_eq!(parse_color("#fff"), Some(Color::WHITE));
/// assert_eq!(parse_color("not-a-color"), None);
/// ```
pub fn parse_color(value: &str) -> Option<Color> {
    let value = value.trim();

    if value.starts_with('#') {
        return Color::from_hex(value);
    }

    if let Some(named) = parse_named(value) {
        return Some(named);
    }

    let (function, args) = parse_function(value)?;
    match function.as_str() {
        "oklch" => oklch_from_args(&args),
        "hsl" | "hsla" => hsl_from_args(&args),
        "rgb" | "rgba" => rgb_from_args(&args),
        _ => None,
    }
}

/// Convert oklch coordinates to sRGB.
///
/// `l` is a fraction in `0.0..=1.0`, `c` the chroma and `h` the hue in
/// degrees. The result is gamma encoded and clamped.
pub fn oklch_to_color(l: f32, c: f32, h: f32, alpha: f32) -> Color {
    let (l, c, h) = (l as f64, c.max(0.0) as f64, h as f64);
    let hue = h.to_radians();
    let a = c * hue.cos();
    let b = c * hue.sin();

    let l_ = l + 0.3963377774 * a + 0.2158037573 * b;
    let m_ = l - 0.1055613458 * a - 0.0638541728 * b;
    let s_ = l - 0.0894841775 * a - 1.291485548 * b;

    let (l3, m3, s3) = (l_.powi(3), m_.powi(3), s_.powi(3));

    let r = 4.0767416621 * l3 - 3.3077115913 * m3 + 0.2309699292 * s3;
    let g = -1.2684380046 * l3 + 2.6097574011 * m3 - 0.3413193965 * s3;
    let b = -0.0041960863 * l3 - 0.7034186147 * m3 + 1.707614701 * s3;

    Color::clamped(
        srgb_encode(r) as f32,
        srgb_encode(g) as f32,
        srgb_encode(b) as f32,
        alpha,
    )
}

/// Convert HSL to sRGB.
///
/// `h` is in degrees and wraps around the circle; `s` and `l` are fractions.
pub fn hsl_to_color(h: f32, s: f32, l: f32, alpha: f32) -> Color {
    let h = h.rem_euclid(360.0);
    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let segment = h / 60.0;
    let x = chroma * (1.0 - (segment.rem_euclid(2.0) - 1.0).abs());

    let (r, g, b) = match segment.floor() as i32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    let offset = l - chroma / 2.0;
    Color::clamped(r + offset, g + offset, b + offset, alpha)
}

/// sRGB transfer function.
fn srgb_encode(linear: f64) -> f64 {
    if linear <= 0.0031308 {
        12.92 * linear
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

fn parse_named(value: &str) -> Option<Color> {
    match value.to_ascii_lowercase().as_str() {
        "black" => Some(Color::BLACK),
        "white" => Some(Color::WHITE),
        "transparent" => Some(Color::TRANSPARENT),
        _ => None,
    }
}

/// A numeric argument inside a color function.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Arg {
    Number(f32),
    /// Percentage as a fraction (`50%` is `0.5`).
    Percent(f32),
    /// Angle in degrees.
    Angle(f32),
}

/// Tokenize `name(args...)`, collecting numeric arguments and dropping
/// `,` and `/` separators.
fn parse_function(value: &str) -> Option<(String, Vec<Arg>)> {
    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);

    let name = match parser.next().ok()? {
        Token::Function(name) => name.to_ascii_lowercase(),
        _ => return None,
    };

    let args = parser
        .parse_nested_block(|p| parse_arguments(p))
        .ok()?;

    parser.is_exhausted().then_some((name, args))
}

fn parse_arguments<'i>(
    parser: &mut Parser<'i, '_>,
) -> std::result::Result<Vec<Arg>, CssParseError<'i, ()>> {
    let mut args = vec![];

    while !parser.is_exhausted() {
        let token = parser.next()?.clone();
        match token {
            Token::Number { value, .. } => args.push(Arg::Number(value)),
            Token::Percentage { unit_value, .. } => args.push(Arg::Percent(unit_value)),
            Token::Dimension { value, unit, .. } => {
                let degrees = match unit.to_ascii_lowercase().as_str() {
                    "deg" => value,
                    "grad" => value * 0.9,
                    "rad" => value.to_degrees(),
                    "turn" => value * 360.0,
                    _ => return Err(parser.new_custom_error(())),
                };
                args.push(Arg::Angle(degrees));
            }
            Token::Ident(ident) if ident.eq_ignore_ascii_case("none") => {
                args.push(Arg::Number(0.0))
            }
            Token::Comma | Token::Delim('/') => {}
            _ => return Err(parser.new_custom_error(())),
        }
    }

    Ok(args)
}

/// Split into three channel arguments and an optional alpha.
fn channels(args: &[Arg]) -> Option<([Arg; 3], Option<Arg>)> {
    match *args {
        [a, b, c] => Some(([a, b, c], None)),
        [a, b, c, alpha] => Some(([a, b, c], Some(alpha))),
        _ => None,
    }
}

fn alpha_value(alpha: Option<Arg>) -> Option<f32> {
    match alpha {
        None => Some(1.0),
        Some(Arg::Number(n)) | Some(Arg::Percent(n)) => Some(n),
        Some(Arg::Angle(_)) => None,
    }
}

fn hue_value(arg: Arg) -> Option<f32> {
    match arg {
        Arg::Number(n) | Arg::Angle(n) => Some(n),
        Arg::Percent(_) => None,
    }
}

fn oklch_from_args(args: &[Arg]) -> Option<Color> {
    let ([l, c, h], alpha) = channels(args)?;

    let lightness = match l {
        // Bare lightness above 1 is a percentage written without `%`.
        Arg::Number(n) if n > 1.0 => n / 100.0,
        Arg::Number(n) | Arg::Percent(n) => n,
        Arg::Angle(_) => return None,
    };
    let chroma = match c {
        Arg::Number(n) => n,
        Arg::Percent(p) => p * OKLCH_CHROMA_PERCENT_REF,
        Arg::Angle(_) => return None,
    };

    Some(oklch_to_color(
        lightness,
        chroma,
        hue_value(h)?,
        alpha_value(alpha)?,
    ))
}

fn hsl_from_args(args: &[Arg]) -> Option<Color> {
    let ([h, s, l], alpha) = channels(args)?;

    let fraction = |arg: Arg| match arg {
        Arg::Percent(p) => Some(p),
        Arg::Number(n) => Some(n / 100.0),
        Arg::Angle(_) => None,
    };

    Some(hsl_to_color(
        hue_value(h)?,
        fraction(s)?,
        fraction(l)?,
        alpha_value(alpha)?,
    ))
}

fn rgb_from_args(args: &[Arg]) -> Option<Color> {
    let ([r, g, b], alpha) = channels(args)?;

    let channel = |arg: Arg| match arg {
        Arg::Number(n) => Some(n / 255.0),
        Arg::Percent(p) => Some(p),
        Arg::Angle(_) => None,
    };

    Some(Color::clamped(
        channel(r)?,
        channel(g)?,
        channel(b)?,
        alpha_value(alpha)?,
    ))
}
