//! Import options.
//!
//! Options can be built in code or read from TOML:
//!
//! ```toml
//! root_font_size = 16
//! json_prefix = "colors"
//! json_float_prefixes = ["radius", "spacing"]
//! synthesize_spacing = true
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::convert::ROOT_FONT_SIZE;
use crate::error::{Error, Result};

/// Settings for a [`TokenImporter`](crate::import::TokenImporter).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImportOptions {
    /// Pixels per `rem`.
    pub root_font_size: f32,
    /// Prefix removed from JSON keys before they become token paths.
    pub json_prefix: Option<String>,
    /// Key namespaces read as numeric tokens from JSON sources.
    pub json_float_prefixes: Vec<String>,
    /// Expand a lone `--spacing` base into the full scale.
    pub synthesize_spacing: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            root_font_size: ROOT_FONT_SIZE,
            json_prefix: None,
            json_float_prefixes: Vec::new(),
            synthesize_spacing: true,
        }
    }
}

impl ImportOptions {
    /// Set the root font size.
    pub fn with_root_font_size(mut self, size: f32) -> Self {
        self.root_font_size = size;
        self
    }

    /// Set the JSON key prefix.
    pub fn with_json_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.json_prefix = Some(prefix.into());
        self
    }

    /// Add a JSON namespace to read numeric tokens from.
    pub fn with_json_float_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.json_float_prefixes.push(prefix.into());
        self
    }

    /// Enable or disable spacing synthesis.
    pub fn with_spacing_synthesis(mut self, enabled: bool) -> Self {
        self.synthesize_spacing = enabled;
        self
    }

    /// Parse options from TOML text and validate them.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let options: Self = toml::from_str(s)?;
        options.validate()?;
        Ok(options)
    }

    /// Read options from a TOML file and validate them.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml_str(&content)
    }

    /// Check that every option holds a usable value.
    pub fn validate(&self) -> Result<()> {
        if !self.root_font_size.is_finite() || self.root_font_size <= 0.0 {
            return Err(Error::invalid_option(
                "root_font_size",
                format!("expected a positive size, got {}", self.root_font_size),
            ));
        }
        if self.json_float_prefixes.iter().any(|p| p.trim_matches('/').is_empty()) {
            return Err(Error::invalid_option(
                "json_float_prefixes",
                "prefixes must not be empty",
            ));
        }
        Ok(())
    }
}
