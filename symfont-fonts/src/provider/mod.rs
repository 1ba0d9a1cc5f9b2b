//! Symbol font registry with name lookup and fallback resolution.
//!
//! Fonts are kept in registration order. Name lookups lowercase both sides
//! and return the first match; a miss falls back to the designated fallback
//! font. The fallback is resolved by name the first time it is needed and
//! the result is cached until a font is added or the designation changes.

mod fallback;

use std::path::PathBuf;
use std::sync::Arc;

use symfont_config::FontCatalog;

use crate::error::FallbackError;
use crate::font::{SymbolFont, SymbolFontHandle, SymbolFontPtr};
use fallback::Fallback;

/// Load outcome of one registered font, as reported by
/// [`SymbolFontsProvider::load_all`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontLoadReport {
    pub name: String,
    pub file_path: PathBuf,
    /// Error message of a failed load, `None` on success
    pub error: Option<String>,
}

impl FontLoadReport {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Registry of symbol fonts.
///
/// All operations run on the caller's thread. Operations that may resolve
/// the fallback take `&mut self`, since resolution updates the cache.
#[derive(Debug, Default)]
pub struct SymbolFontsProvider {
    /// Registered fonts in insertion order; duplicates allowed
    fonts: Vec<Arc<SymbolFont>>,
    fallback: Fallback,
}

impl SymbolFontsProvider {
    /// Create an empty registry with no fallback designated.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every catalog entry, in catalog order, with
    /// the catalog's fallback designation.
    ///
    /// Fonts are not loaded here.
    pub fn from_catalog(catalog: &FontCatalog) -> Self {
        let mut provider = Self::new();
        for entry in &catalog.fonts {
            let font = SymbolFont::new(
                entry.name.as_str(),
                entry.family.as_str(),
                catalog.resolve_path(entry),
            )
            .with_face_index(entry.face_index);
            provider.add_symbol_font(font);
        }
        provider.set_fallback_font(catalog.fallback_font.as_str());
        log::info!(
            "Registered {} symbol fonts (fallback '{}')",
            provider.len(),
            provider.fallback_name()
        );
        provider
    }

    /// Register a font. The file is not read until the font is first used.
    pub fn add_font(
        &mut self,
        name: impl Into<String>,
        family: impl Into<String>,
        file_path: impl Into<PathBuf>,
    ) {
        self.add_symbol_font(SymbolFont::new(name, family, file_path));
    }

    /// Register an already constructed font.
    pub fn add_symbol_font(&mut self, font: SymbolFont) {
        log::debug!(
            "Adding symbol font '{}' ({:?})",
            font.name(),
            font.file_path()
        );
        self.fonts.push(Arc::new(font));
        // The new font may be the fallback target
        self.fallback.invalidate();
    }

    /// Look up a font by name, case-insensitively.
    ///
    /// Returns the first registered font whose name matches, or the fallback
    /// font when none does. The returned font has been loaded.
    ///
    /// # Errors
    /// Only when the name is unknown and the fallback cannot be resolved.
    pub fn font_by_name(&mut self, name: &str) -> Result<SymbolFontPtr, FallbackError> {
        let found = self.find(name).cloned();
        let font = match found {
            Some(font) => font,
            None => {
                log::debug!("Symbol font '{}' not found, using fallback", name);
                self.resolve_fallback()?
            }
        };
        font.ensure_load();
        Ok(font as SymbolFontPtr)
    }

    /// All registered fonts in registration order.
    pub fn fonts(&self) -> Vec<SymbolFontPtr> {
        self.fonts
            .iter()
            .map(|font| Arc::clone(font) as SymbolFontPtr)
            .collect()
    }

    /// Designate the fallback font by name.
    ///
    /// The name is not checked here; it is resolved on first use.
    pub fn set_fallback_font(&mut self, name: impl Into<String>) {
        self.fallback.set_name(name);
        log::debug!("Fallback symbol font set to '{}'", self.fallback.name);
    }

    /// Name of the designated fallback font.
    pub fn fallback_name(&self) -> &str {
        &self.fallback.name
    }

    /// The fallback font, resolved and loaded.
    ///
    /// # Errors
    /// When no registered font matches the fallback name. The cache stays
    /// unresolved, so registering the font later fixes it.
    pub fn fallback_font(&mut self) -> Result<SymbolFontPtr, FallbackError> {
        let font = self.resolve_fallback()?;
        font.ensure_load();
        Ok(font as SymbolFontPtr)
    }

    /// Whether `font` is the very instance the fallback resolves to.
    ///
    /// Resolves the fallback if needed; an unresolvable fallback matches
    /// nothing.
    pub fn is_fallback_font(&mut self, font: &dyn SymbolFontHandle) -> bool {
        match self.resolve_fallback() {
            Ok(fallback) => std::ptr::eq(
                Arc::as_ptr(&fallback).cast::<()>(),
                std::ptr::from_ref(font).cast::<()>(),
            ),
            Err(_) => false,
        }
    }

    /// Number of registered fonts.
    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Whether a font with this name (case-insensitive) is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Load every registered font and report each outcome in registration
    /// order. Fonts that already attempted a load report that attempt.
    pub fn load_all(&self) -> Vec<FontLoadReport> {
        self.fonts
            .iter()
            .map(|font| FontLoadReport {
                name: font.name().to_string(),
                file_path: font.file_path().to_path_buf(),
                error: font.try_load().err().map(|e| e.to_string()),
            })
            .collect()
    }

    fn find(&self, name: &str) -> Option<&Arc<SymbolFont>> {
        let name_lo = name.to_lowercase();
        self.fonts
            .iter()
            .find(|font| font.name().to_lowercase() == name_lo)
    }

    fn resolve_fallback(&mut self) -> Result<Arc<SymbolFont>, FallbackError> {
        if let Some(font) = self.fallback.cached() {
            return Ok(Arc::clone(font));
        }

        let Some(font) = self.find(&self.fallback.name).cloned() else {
            log::error!(
                "Fallback symbol font '{}' is not registered ({} fonts registered)",
                self.fallback.name,
                self.fonts.len()
            );
            return Err(FallbackError::NotRegistered {
                name: self.fallback.name.clone(),
            });
        };

        log::debug!("Resolved fallback symbol font '{}'", font.name());
        self.fallback.resolve_with(Arc::clone(&font));
        Ok(font)
    }
}
