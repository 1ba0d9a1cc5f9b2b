//! Symbol font registry for music engraving.
//!
//! This crate provides:
//! - Lazily loaded symbol fonts (SMuFL glyph fonts such as Bravura or Leland)
//! - A registry that resolves font names case-insensitively
//! - A designated fallback font substituted when a lookup fails
//!
//! # Architecture
//!
//! The `SymbolFontsProvider` owns an insertion-ordered list of `SymbolFont`
//! handles. Lookups walk the list and return the first match, or the
//! fallback font when nothing matches. The fallback is resolved by name on
//! first use and cached until the registry or the designation changes.
//! Every handle returned by a lookup has had its font file loaded, or its
//! load failure recorded.

pub mod error;
pub mod font;
pub mod provider;

// Re-export main types for convenience
pub use error::{FallbackError, FontError};
pub use font::{FontData, SymbolFont, SymbolFontHandle, SymbolFontPtr};
pub use provider::{FontLoadReport, SymbolFontsProvider};
