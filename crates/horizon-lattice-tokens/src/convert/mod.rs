//! Value converters: colors and lengths.

mod color;
mod dimension;

pub use color::{hsl_to_color, oklch_to_color, parse_color};
pub use dimension::{
    LengthValue, ROOT_FONT_SIZE, parse_dimension, parse_dimension_with_root, parse_number,
};
