//! High-level import of CSS and JSON token sources.
//!
//! [`TokenImporter`] ties extraction, categorization and JSON normalization
//! together under one set of [`ImportOptions`].
//!
//! # Example
//!
//! ```
//! use horizon_lattice_tokens::prelude::*;
//!
//! let css = r#"
//! @theme {
//!   --color-brand: #3b82f6;
//!   --radius-md: 0.375rem;
//! }
//!
//! :root {
//!   --background: oklch(1 0 0);
//! }
//!
//! .dark {
//!   --background: oklch(0.145 0 0);
//! }
//! "#;
//!
//! let tokens = TokenImporter::new().import_css(css);
//! assert_eq!(tokens.primitives.colors.len(), 1);
//! assert_eq!(tokens.light.colors[0].color, Color::WHITE);
//! assert_eq!(tokens.dark.colors.len(), 1);
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::categorize::{Categorizer, classify};
use crate::config::ImportOptions;
use crate::convert::parse_color;
use crate::error::{Error, Result};
use crate::extract::{VariableMap, extract_root_and_dark, extract_theme_block, extract_variables, has_theme_block};
use crate::json::{FloatPair, ModeColors, extract_json_floats_with_root, json_color_tokens};
use crate::logging::targets;
use crate::types::{ColorToken, RawVariable, TokenSet, split_path};

/// Tokens read from a stylesheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CssTokens {
    /// Mode-independent tokens from `@theme`, or from the whole sheet when it
    /// has neither `@theme` nor `:root`/`.dark` declarations.
    pub primitives: TokenSet,
    /// Tokens from `:root`.
    pub light: TokenSet,
    /// Tokens from `.dark`.
    pub dark: TokenSet,
}

impl CssTokens {
    /// Check if no tokens were found anywhere in the sheet.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty() && self.light.is_empty() && self.dark.is_empty()
    }
}

/// Tokens read from a flat JSON source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JsonTokens {
    pub colors: ModeColors,
    /// Numeric tokens keyed by the namespace they were read from.
    pub floats: BTreeMap<String, Vec<FloatPair>>,
}

impl JsonTokens {
    /// Check if the source produced no tokens.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty() && self.floats.values().all(Vec::is_empty)
    }
}

/// Imports design tokens according to a set of [`ImportOptions`].
#[derive(Debug, Clone, Default)]
pub struct TokenImporter {
    options: ImportOptions,
    categorizer: Categorizer,
}

impl TokenImporter {
    /// Create an importer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an importer from validated options.
    pub fn with_options(options: ImportOptions) -> Result<Self> {
        options.validate()?;
        let categorizer = Categorizer::new()
            .with_root_font_size(options.root_font_size)
            .with_spacing_synthesis(options.synthesize_spacing);
        Ok(Self {
            options,
            categorizer,
        })
    }

    /// The options in effect.
    pub fn options(&self) -> &ImportOptions {
        &self.options
    }

    /// Classify raw variables with the configured root size.
    pub fn categorize(&self, vars: &[RawVariable]) -> TokenSet {
        self.categorizer.categorize(vars)
    }

    /// Import every token scope of a stylesheet.
    pub fn import_css(&self, css: &str) -> CssTokens {
        let modes = extract_root_and_dark(css);
        let has_theme = has_theme_block(css);

        let primitives = if has_theme {
            extract_theme_block(css)
        } else if modes.light.is_empty() && modes.dark.is_empty() {
            tracing::debug!(target: targets::IMPORT, "no scoped blocks, reading the whole sheet");
            extract_variables(css)
        } else {
            Vec::new()
        };

        let tokens = CssTokens {
            primitives: self.categorize(&primitives),
            light: self.categorize_mode(&modes.light),
            dark: self.categorize_mode(&modes.dark),
        };

        tracing::debug!(
            target: targets::IMPORT,
            theme = has_theme,
            primitives = tokens.primitives.len(),
            light = tokens.light.len(),
            dark = tokens.dark.len(),
            "imported stylesheet"
        );
        tokens
    }

    /// Read and import a stylesheet from disk.
    pub fn import_css_file(&self, path: impl AsRef<Path>) -> Result<CssTokens> {
        let path = path.as_ref();
        let css = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Ok(self.import_css(&css))
    }

    /// Import colors and the configured numeric namespaces from JSON.
    pub fn import_json(&self, data: &Value) -> JsonTokens {
        let colors = json_color_tokens(data, self.options.json_prefix.as_deref());
        let floats = self
            .options
            .json_float_prefixes
            .iter()
            .map(|prefix| {
                let pairs = extract_json_floats_with_root(data, prefix, self.options.root_font_size);
                (prefix.trim_end_matches('/').to_string(), pairs)
            })
            .collect();

        let tokens = JsonTokens { colors, floats };
        tracing::debug!(
            target: targets::IMPORT,
            light = tokens.colors.light.len(),
            dark = tokens.colors.dark.len(),
            namespaces = tokens.floats.len(),
            "imported JSON source"
        );
        tokens
    }

    /// Decode JSON text and import it.
    pub fn import_json_str(&self, text: &str) -> Result<JsonTokens> {
        let data: Value = serde_json::from_str(text)?;
        Ok(self.import_json(&data))
    }

    // Mode blocks use semantic names (`--background`, `--chart-1`) that no
    // rule claims; those become colors when their value is one.
    fn categorize_mode(&self, vars: &VariableMap) -> TokenSet {
        let raw = vars.to_raw_variables();
        let mut tokens = self.categorize(&raw);

        for var in raw.iter().filter(|v| classify(v.bare_name()).is_none()) {
            let path = split_path(var.bare_name());
            if path.is_empty() {
                continue;
            }
            if let Some(color) = parse_color(var.raw_value.trim()) {
                tokens.insert_color(ColorToken {
                    path,
                    color,
                    raw_value: var.raw_value.clone(),
                });
            }
        }

        tokens
    }
}
