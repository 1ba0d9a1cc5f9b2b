//! Fallback designation and its resolution cache.

use std::sync::Arc;

use crate::font::SymbolFont;

/// Resolution state of the fallback font.
#[derive(Debug, Default)]
pub(crate) enum FallbackCache {
    /// Not resolved since the last registry or designation change
    #[default]
    Unresolved,
    /// Resolved to a registered font
    Resolved(Arc<SymbolFont>),
}

/// The fallback font name and its cached resolution.
#[derive(Debug, Default)]
pub(crate) struct Fallback {
    pub(crate) name: String,
    pub(crate) cache: FallbackCache,
}

impl Fallback {
    pub(crate) fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.invalidate();
    }

    pub(crate) fn invalidate(&mut self) {
        self.cache = FallbackCache::Unresolved;
    }

    pub(crate) fn cached(&self) -> Option<&Arc<SymbolFont>> {
        match &self.cache {
            FallbackCache::Resolved(font) => Some(font),
            FallbackCache::Unresolved => None,
        }
    }

    pub(crate) fn resolve_with(&mut self, font: Arc<SymbolFont>) {
        self.cache = FallbackCache::Resolved(font);
    }
}
