//! Default values for the font catalog.

use crate::catalog::SymbolFontEntry;

/// Name of the fallback font used when no catalog overrides it.
pub fn fallback_font() -> String {
    "Bravura".to_string()
}

/// The standard engraving font set shipped alongside the registry.
///
/// Paths are relative and resolve against the catalog's `fonts_dir`.
pub fn symbol_fonts() -> Vec<SymbolFontEntry> {
    [
        ("Leland", "Leland", "Leland/Leland.otf"),
        ("Bravura", "Bravura", "Bravura/Bravura.otf"),
        ("Emmentaler", "MScore", "Emmentaler/mscore.ttf"),
        ("Gonville", "Gootville", "Gootville/Gootville.otf"),
        ("MuseJazz", "MuseJazz", "MuseJazz/MuseJazz.otf"),
        ("Petaluma", "Petaluma", "Petaluma/Petaluma.otf"),
        ("Finale Maestro", "Finale Maestro", "FinaleMaestro/FinaleMaestro.otf"),
        ("Finale Broadway", "Finale Broadway", "FinaleBroadway/FinaleBroadway.otf"),
    ]
    .into_iter()
    .map(|(name, family, path)| SymbolFontEntry::new(name, family, path))
    .collect()
}
