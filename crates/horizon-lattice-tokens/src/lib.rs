//! Design-token import for Horizon Lattice.
//!
//! This crate turns CSS design-token sources (Tailwind v4 `@theme` blocks,
//! shadcn-style `:root`/`.dark` sheets, or loose custom properties) and flat
//! JSON theme exports into a typed [`TokenSet`](types::TokenSet):
//!
//! - **Colors**: oklch, HSL, hex and rgb/rgba notations resolved to one
//!   canonical RGBA value
//! - **Lengths**: `px`, `rem` and `em` resolved to pixels
//! - **Shadows**: multi-layer values decomposed into offsets, blur, spread
//!   and color
//! - **Categorization**: an ordered rule table sorting custom properties into
//!   spacing, radius, typography, shadows and the other families
//!
//! Nothing in the parsing path fails: values that cannot be read are skipped
//! and logged at `debug` level.
//!
//! # Example
//!
//! ```
//! use horizon_lattice_tokens::prelude::*;
//!
//! let css = r#"
//! @theme {
//!   --color-red-500: oklch(63.7% 0.237 25.331);
//!   --spacing: 0.25rem;
//!   --text-sm: 0.875rem;
//!   --text-sm--line-height: calc(1.25 / 0.875);
//!   --shadow-sm: 0 1px 3px 0 rgb(0 0 0 / 0.1), 0 1px 2px -1px rgb(0 0 0 / 0.1);
//! }
//! "#;
//!
//! let tokens = TokenImporter::new().import_css(css).primitives;
//!
//! assert_eq!(tokens.colors[0].path, vec!["red", "500"]);
//! assert_eq!(tokens.spacing.len(), 33);
//! assert_eq!(tokens.typography[0].font_size, 14.0);
//! assert_eq!(tokens.shadows[0].layers.len(), 2);
//! ```

pub mod categorize;
pub mod config;
pub mod convert;
pub mod extract;
pub mod import;
pub mod json;
pub mod logging;
pub mod shadow;
pub mod types;

mod error;

pub use error::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::categorize::{Categorizer, categorize};
    pub use crate::config::ImportOptions;
    pub use crate::convert::{parse_color, parse_dimension};
    pub use crate::extract::{extract_root_and_dark, extract_theme_block, extract_variables};
    pub use crate::import::{CssTokens, JsonTokens, TokenImporter};
    pub use crate::json::{FloatPair, ModeColors};
    pub use crate::types::{
        Color, ColorToken, FloatFamily, FloatToken, FontToken, RawVariable, ShadowKind,
        ShadowLayer, ShadowToken, TokenSet, TypographyToken,
    };
}
