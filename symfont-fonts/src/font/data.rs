//! Loaded font bytes and the parsed face that borrows them.

use std::sync::Arc;
use swash::FontRef;

/// Stores font data with lifetime management.
///
/// This struct owns the font data bytes and a `FontRef` parsed from them.
/// Both fields are private: the `FontRef` points into `data`, so `data` must
/// never be replaced while the struct is alive. Accessors hand out borrows
/// tied to `&self`.
#[derive(Clone)]
pub struct FontData {
    /// Raw font data bytes (TTF/OTF)
    data: Arc<Vec<u8>>,
    /// Swash font reference into `data`
    font_ref: FontRef<'static>,
}

impl std::fmt::Debug for FontData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontData")
            .field("data_len", &self.data.len())
            .field("glyph_count", &self.glyph_count())
            .finish()
    }
}

impl FontData {
    /// Create a new FontData from bytes using face index 0.
    ///
    /// Returns `None` if the bytes are not a valid font.
    pub fn new(data: Vec<u8>) -> Option<Self> {
        Self::new_with_index(data, 0)
    }

    /// Create a new FontData from bytes with a specific face index.
    ///
    /// Needed for TrueType Collection (.ttc) files where several faces share
    /// the same data.
    pub fn new_with_index(data: Vec<u8>, face_index: usize) -> Option<Self> {
        let data_arc = Arc::new(data);

        // SAFETY: the bytes live in the Arc stored next to the FontRef and the
        // field is private, so the FontRef never outlives them. The Vec's heap
        // buffer does not move when the Arc or the struct is moved.
        let font_ref = unsafe {
            let bytes = data_arc.as_slice();
            let static_bytes: &'static [u8] = std::mem::transmute(bytes);
            FontRef::from_index(static_bytes, face_index)?
        };

        Some(FontData {
            data: data_arc,
            font_ref,
        })
    }

    /// Raw font file bytes.
    pub fn bytes(&self) -> &[u8] {
        self.data.as_slice()
    }

    /// Parsed face, borrowed for no longer than `self`.
    pub fn font_ref(&self) -> FontRef<'_> {
        self.font_ref
    }

    /// Glyph id for a character, or `None` if the face has no glyph for it.
    ///
    /// SMuFL fonts map their musical symbols into the Private Use Area, e.g.
    /// U+E050 for the G clef.
    pub fn glyph_id(&self, character: char) -> Option<u16> {
        match self.font_ref.charmap().map(character) {
            0 => None,
            id => Some(id),
        }
    }

    /// Number of glyphs in the face.
    pub fn glyph_count(&self) -> u16 {
        self.font_ref.metrics(&[]).glyph_count
    }
}
