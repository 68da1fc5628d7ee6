//! Logging targets for the token engine.
//!
//! The crate logs through `tracing` and never installs a subscriber. Skipped
//! declarations are reported at `trace`/`debug` level only: a value that
//! fails to parse is an expected outcome, not a warning.
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_lattice_tokens::categorize=debug")
//!     .init();
//! ```

/// Target names for log filtering.
pub mod targets {
    /// Variable and block extraction.
    pub const EXTRACT: &str = "horizon_lattice_tokens::extract";
    /// Rule-based categorization.
    pub const CATEGORIZE: &str = "horizon_lattice_tokens::categorize";
    /// Shadow decomposition.
    pub const SHADOW: &str = "horizon_lattice_tokens::shadow";
    /// JSON normalization.
    pub const JSON: &str = "horizon_lattice_tokens::json";
    /// Import façade.
    pub const IMPORT: &str = "horizon_lattice_tokens::import";
}
