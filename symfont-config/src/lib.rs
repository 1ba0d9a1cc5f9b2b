//! Configuration system for the symfont symbol font registry.
//!
//! This crate provides the on-disk font catalog that seeds the registry:
//!
//! - Symbol font entries (name, family, file path)
//! - The designated fallback font name
//! - Font directory resolution for relative paths
//! - Log level selection for the command-line front end

pub mod catalog;
pub mod defaults;
pub mod error;
mod types;

// Re-export main types for convenience
pub use catalog::{FontCatalog, SymbolFontEntry};
pub use error::ConfigError;
pub use types::LogLevel;
