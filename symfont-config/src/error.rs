//! Typed error variants for the symfont-config crate.
//!
//! `FontCatalog::load` and friends return `anyhow::Result` at the application
//! boundary; callers that want to distinguish failure modes can downcast to
//! `ConfigError`.

use thiserror::Error;

/// Errors that can occur when loading, saving or validating a font catalog.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An I/O error occurred reading or writing the catalog file.
    #[error("I/O error reading font catalog: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog file contained invalid YAML that could not be parsed.
    #[error("YAML parse error in font catalog: {0}")]
    Parse(#[from] serde_yaml_ng::Error),

    /// A field value failed semantic validation.
    ///
    /// The inner string describes which field is invalid and why.
    #[error("Font catalog validation error: {0}")]
    Validation(String),
}
