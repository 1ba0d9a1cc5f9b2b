// Library exports for testing and potential library use
//
// The registry itself lives in `symfont-fonts` and the catalog format in
// `symfont-config`; this crate wires them to the command line.

/// Application version (root crate version, for use by sub-crates).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod logging;

pub use symfont_config::{FontCatalog, LogLevel, SymbolFontEntry};
pub use symfont_fonts::{
    FallbackError, FontData, FontError, FontLoadReport, SymbolFont, SymbolFontHandle,
    SymbolFontPtr, SymbolFontsProvider,
};
