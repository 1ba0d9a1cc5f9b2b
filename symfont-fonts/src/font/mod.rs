//! Symbol fonts: named, file-backed font resources that load on first use.

mod data;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use crate::error::FontError;

pub use data::FontData;

/// Shared handle to a registered symbol font.
pub type SymbolFontPtr = Arc<dyn SymbolFontHandle>;

/// Read-only view of a symbol font handed out by the registry.
pub trait SymbolFontHandle: fmt::Debug + Send + Sync {
    /// Lookup name of the font
    fn name(&self) -> &str;

    /// Font family name
    fn family(&self) -> &str;

    /// Path of the backing font file
    fn file_path(&self) -> &Path;

    /// Loaded font data, if loading has happened and succeeded
    fn font_data(&self) -> Option<&FontData>;

    /// Error recorded by a failed load attempt
    fn load_error(&self) -> Option<&FontError>;

    fn is_loaded(&self) -> bool {
        self.font_data().is_some()
    }

    /// Glyph id for a character in this font (see [`FontData::glyph_id`]).
    fn glyph_id(&self, character: char) -> Option<u16> {
        self.font_data().and_then(|data| data.glyph_id(character))
    }
}

/// Outcome of the single load attempt a font makes.
enum LoadState {
    Loaded(FontData),
    Failed(FontError),
}

/// A named symbol font backed by a font file.
///
/// Nothing is read from disk at construction. The first call to
/// [`SymbolFont::ensure_load`] or [`SymbolFont::try_load`] reads and parses
/// the file; later calls return the recorded outcome without touching disk,
/// including a recorded failure.
pub struct SymbolFont {
    name: String,
    family: String,
    file_path: PathBuf,
    face_index: usize,
    state: OnceLock<LoadState>,
}

impl fmt::Debug for SymbolFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.state.get() {
            None => "unloaded",
            Some(LoadState::Loaded(_)) => "loaded",
            Some(LoadState::Failed(_)) => "failed",
        };
        f.debug_struct("SymbolFont")
            .field("name", &self.name)
            .field("family", &self.family)
            .field("file_path", &self.file_path)
            .field("face_index", &self.face_index)
            .field("state", &state)
            .finish()
    }
}

impl SymbolFont {
    pub fn new(
        name: impl Into<String>,
        family: impl Into<String>,
        file_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            family: family.into(),
            file_path: file_path.into(),
            face_index: 0,
            state: OnceLock::new(),
        }
    }

    /// Select a face within a font collection file
    pub fn with_face_index(mut self, face_index: usize) -> Self {
        self.face_index = face_index;
        self
    }

    pub fn face_index(&self) -> usize {
        self.face_index
    }

    /// Load the font if that has not been attempted yet.
    ///
    /// Returns the font data, or `None` if loading failed. A failure is
    /// logged once, when it happens.
    pub fn ensure_load(&self) -> Option<&FontData> {
        self.try_load().ok()
    }

    /// Load the font if that has not been attempted yet, reporting the
    /// error of a failed attempt.
    pub fn try_load(&self) -> Result<&FontData, &FontError> {
        match self.state.get_or_init(|| self.load()) {
            LoadState::Loaded(data) => Ok(data),
            LoadState::Failed(err) => Err(err),
        }
    }

    /// Whether a load attempt has been made, successful or not.
    pub fn load_attempted(&self) -> bool {
        self.state.get().is_some()
    }

    fn load(&self) -> LoadState {
        log::debug!(
            "Loading symbol font '{}' from {:?}",
            self.name,
            self.file_path
        );
        match read_font_file(&self.file_path, self.face_index) {
            Ok(data) => {
                log::info!(
                    "Loaded symbol font '{}' ({} glyphs)",
                    self.name,
                    data.glyph_count()
                );
                LoadState::Loaded(data)
            }
            Err(e) => {
                log::error!("Failed to load symbol font '{}': {}", self.name, e);
                LoadState::Failed(e)
            }
        }
    }
}

impl SymbolFontHandle for SymbolFont {
    fn name(&self) -> &str {
        &self.name
    }

    fn family(&self) -> &str {
        &self.family
    }

    fn file_path(&self) -> &Path {
        &self.file_path
    }

    fn font_data(&self) -> Option<&FontData> {
        match self.state.get() {
            Some(LoadState::Loaded(data)) => Some(data),
            _ => None,
        }
    }

    fn load_error(&self) -> Option<&FontError> {
        match self.state.get() {
            Some(LoadState::Failed(err)) => Some(err),
            _ => None,
        }
    }
}

fn read_font_file(path: &Path, face_index: usize) -> Result<FontData, FontError> {
    let bytes = fs::read(path).map_err(|source| FontError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    FontData::new_with_index(bytes, face_index).ok_or_else(|| FontError::InvalidFontData {
        path: path.to_path_buf(),
        face_index,
    })
}
