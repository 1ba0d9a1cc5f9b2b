//! Typed error types for symfont-fonts.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a symbol font from disk.
#[derive(Debug, Error)]
pub enum FontError {
    /// The font file could not be read.
    #[error("Font file read failed for '{}': {source}", .path.display())]
    Io {
        /// Path to the font file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file was read but does not contain a usable font face.
    #[error("Invalid font data in '{}' (face index {face_index})", .path.display())]
    InvalidFontData {
        /// Path to the font file.
        path: PathBuf,
        /// Face index that was requested.
        face_index: usize,
    },
}

/// The configured fallback font could not be resolved.
///
/// This means the registry was misconfigured: the fallback name matches no
/// registered font. Callers decide whether that is fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FallbackError {
    /// No registered font matches the fallback name.
    #[error("Fallback symbol font '{name}' is not registered")]
    NotRegistered {
        /// The configured fallback name.
        name: String,
    },
}
