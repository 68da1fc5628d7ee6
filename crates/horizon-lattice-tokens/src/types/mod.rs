//! Token model types.

mod color;
mod token;
mod token_set;

pub use color::{COLOR_TOLERANCE, Color};
pub use token::{
    ColorToken, FloatToken, FontToken, RawVariable, ShadowKind, ShadowLayer, ShadowToken,
    TypographyToken, split_path,
};
pub use token_set::{FloatFamily, TokenSet};
