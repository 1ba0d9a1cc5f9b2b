//! Integration tests for the symbol font registry.

use std::fs;
use std::path::{Path, PathBuf};

use symfont_config::FontCatalog;
use symfont_fonts::{FallbackError, FontError, SymbolFont, SymbolFontHandle, SymbolFontsProvider};
use tempfile::TempDir;

/// DejaVu Sans Mono shipped with the crate for tests.
fn test_font_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fonts/DejaVuSansMono.ttf")
}

/// Registry with the usual engraving fonts, none of which exist on disk.
fn engraving_provider() -> SymbolFontsProvider {
    let mut provider = SymbolFontsProvider::new();
    provider.add_font("Leland", "Leland", "/nonexistent/Leland.otf");
    provider.add_font("Bravura", "Bravura", "/nonexistent/Bravura.otf");
    provider.add_font("Emmentaler", "MScore", "/nonexistent/mscore.ttf");
    provider.add_font("Petaluma", "Petaluma", "/nonexistent/Petaluma.otf");
    provider.set_fallback_font("Bravura");
    provider
}

#[test]
fn test_lookup_exact_case_returns_each_font() {
    let mut provider = engraving_provider();
    for name in ["Leland", "Bravura", "Emmentaler", "Petaluma"] {
        let font = provider.font_by_name(name).unwrap();
        assert_eq!(font.name(), name);
    }
}

#[test]
fn test_lookup_ignores_case() {
    let mut provider = engraving_provider();
    for query in ["petaluma", "PETALUMA", "pEtAlUmA"] {
        let font = provider.font_by_name(query).unwrap();
        assert_eq!(font.name(), "Petaluma");
        assert!(!provider.is_fallback_font(font.as_ref()));
    }
}

#[test]
fn test_lookup_ignores_case_beyond_ascii() {
    let mut provider = SymbolFontsProvider::new();
    provider.add_font("Émile", "Émile", "/nonexistent/emile.otf");
    provider.add_font("Bravura", "Bravura", "/nonexistent/Bravura.otf");
    provider.set_fallback_font("Bravura");

    let font = provider.font_by_name("ÉMILE").unwrap();
    assert_eq!(font.name(), "Émile");
}

#[test]
fn test_unknown_name_returns_fallback() {
    let mut provider = engraving_provider();
    let font = provider.font_by_name("nonexistent").unwrap();
    assert_eq!(font.name(), "Bravura");
    assert!(provider.is_fallback_font(font.as_ref()));
}

#[test]
fn test_uppercase_fallback_name_matches_directly() {
    let mut provider = SymbolFontsProvider::new();
    provider.add_font("Bravura", "Bravura", "bravura.otf");
    provider.set_fallback_font("Bravura");

    let font = provider.font_by_name("BRAVURA").unwrap();
    assert_eq!(font.name(), "Bravura");
    assert_eq!(font.family(), "Bravura");
    assert_eq!(font.file_path(), PathBuf::from("bravura.otf"));
    assert!(provider.is_fallback_font(font.as_ref()));
}

#[test]
fn test_fallback_resolves_after_registration() {
    let mut provider = SymbolFontsProvider::new();
    provider.add_font("Leland", "Leland", "/nonexistent/Leland.otf");
    provider.set_fallback_font("X");

    assert_eq!(
        provider.fallback_font().unwrap_err(),
        FallbackError::NotRegistered {
            name: "X".to_string()
        }
    );
    assert!(provider.font_by_name("missing").is_err());

    provider.add_font("X", "X", "/nonexistent/x.otf");
    let fallback = provider.fallback_font().unwrap();
    assert_eq!(fallback.name(), "X");
    assert_eq!(provider.font_by_name("missing").unwrap().name(), "X");
}

#[test]
fn test_known_name_resolves_without_fallback() {
    let mut provider = SymbolFontsProvider::new();
    provider.add_font("Leland", "Leland", "/nonexistent/Leland.otf");
    provider.set_fallback_font("Unregistered");

    let font = provider.font_by_name("leland").unwrap();
    assert_eq!(font.name(), "Leland");
}

#[test]
fn test_fallback_is_always_fallback() {
    let mut provider = engraving_provider();
    let fallback = provider.fallback_font().unwrap();
    assert!(provider.is_fallback_font(fallback.as_ref()));

    // Still the same instance after re-resolution
    provider.add_font("Gonville", "Gootville", "/nonexistent/Gootville.otf");
    assert!(provider.is_fallback_font(fallback.as_ref()));
}

#[test]
fn test_lookup_of_fallback_name_is_fallback() {
    let mut provider = engraving_provider();
    let fallback_name = provider.fallback_name().to_string();
    let font = provider.font_by_name(&fallback_name).unwrap();
    assert!(provider.is_fallback_font(font.as_ref()));
}

#[test]
fn test_is_fallback_compares_identity_not_name() {
    let mut provider = engraving_provider();
    // A different instance with the same name is not the fallback
    let lookalike = SymbolFont::new("Bravura", "Bravura", "/nonexistent/Bravura.otf");
    assert!(!provider.is_fallback_font(&lookalike));
}

#[test]
fn test_is_fallback_false_when_unresolvable() {
    let mut provider = SymbolFontsProvider::new();
    provider.add_font("Leland", "Leland", "/nonexistent/Leland.otf");
    provider.set_fallback_font("Bravura");
    let leland = provider.font_by_name("Leland").unwrap();
    assert!(!provider.is_fallback_font(leland.as_ref()));
}

#[test]
fn test_duplicate_names_first_wins() {
    let mut provider = SymbolFontsProvider::new();
    provider.add_font("Bravura", "Bravura", "/nonexistent/first.otf");
    provider.add_font("BRAVURA", "Bravura Text", "/nonexistent/second.otf");
    provider.set_fallback_font("bravura");

    let font = provider.font_by_name("Bravura").unwrap();
    assert_eq!(font.file_path(), PathBuf::from("/nonexistent/first.otf"));
    let fallback = provider.fallback_font().unwrap();
    assert_eq!(fallback.file_path(), PathBuf::from("/nonexistent/first.otf"));
}

#[test]
fn test_fonts_preserve_insertion_order_with_duplicates() {
    let mut provider = SymbolFontsProvider::new();
    provider.add_font("Leland", "Leland", "a.otf");
    provider.add_font("Bravura", "Bravura", "b.otf");
    provider.add_font("Leland", "Leland", "c.otf");

    let names: Vec<_> = provider
        .fonts()
        .iter()
        .map(|f| f.name().to_string())
        .collect();
    assert_eq!(names, ["Leland", "Bravura", "Leland"]);
    assert_eq!(provider.len(), 3);
    assert!(!provider.is_empty());
}

#[test]
fn test_fonts_are_not_loaded_by_listing() {
    let provider = engraving_provider();
    assert!(provider.fonts().iter().all(|f| !f.is_loaded()));
    assert!(provider.fonts().iter().all(|f| f.load_error().is_none()));
}

#[test]
fn test_invalid_font_file_reports_invalid_data() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("broken.otf");
    fs::write(&path, b"definitely not an OpenType file").unwrap();

    let mut provider = SymbolFontsProvider::new();
    provider.add_font("Broken", "Broken", &path);
    provider.set_fallback_font("Broken");

    let font = provider.font_by_name("broken").unwrap();
    assert!(!font.is_loaded());
    assert!(matches!(
        font.load_error(),
        Some(FontError::InvalidFontData { face_index: 0, .. })
    ));
}

#[test]
fn test_load_all_reports_each_font() {
    let temp_dir = TempDir::new().unwrap();
    let broken = temp_dir.path().join("broken.otf");
    fs::write(&broken, [0u8; 64]).unwrap();

    let mut provider = SymbolFontsProvider::new();
    provider.add_font("Missing", "Missing", temp_dir.path().join("missing.otf"));
    provider.add_font("Broken", "Broken", &broken);

    let reports = provider.load_all();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].name, "Missing");
    assert!(!reports[0].is_ok());
    assert!(reports[0].error.as_deref().unwrap().contains("read failed"));
    assert_eq!(reports[1].file_path, broken);
    assert!(
        reports[1]
            .error
            .as_deref()
            .unwrap()
            .contains("Invalid font data")
    );
}

#[test]
fn test_load_is_attempted_once() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("late.otf");

    let mut provider = SymbolFontsProvider::new();
    provider.add_font("Late", "Late", &path);
    provider.set_fallback_font("Late");
    let font = provider.fallback_font().unwrap();
    assert!(matches!(font.load_error(), Some(FontError::Io { .. })));

    // Creating the file afterwards does not trigger a reload
    fs::write(&path, [0u8; 16]).unwrap();
    let again = provider.font_by_name("late").unwrap();
    assert!(matches!(again.load_error(), Some(FontError::Io { .. })));
}

#[test]
fn test_from_catalog_registers_in_order() {
    let catalog = FontCatalog::empty()
        .with_fonts_dir("/opt/symfont")
        .with_fallback("Leland")
        .with_font("Bravura", "Bravura", "Bravura/Bravura.otf")
        .with_font("Leland", "Leland", "/abs/Leland.otf");

    let mut provider = SymbolFontsProvider::from_catalog(&catalog);
    assert_eq!(provider.fallback_name(), "Leland");

    let fonts = provider.fonts();
    assert_eq!(fonts.len(), 2);
    assert_eq!(
        fonts[0].file_path(),
        PathBuf::from("/opt/symfont/Bravura/Bravura.otf")
    );
    assert_eq!(fonts[1].file_path(), PathBuf::from("/abs/Leland.otf"));

    let fallback = provider.font_by_name("unknown").unwrap();
    assert_eq!(fallback.name(), "Leland");
}

#[test]
fn test_default_catalog_has_resolvable_fallback() {
    let mut provider = SymbolFontsProvider::from_catalog(&FontCatalog::default());
    let fallback = provider.fallback_font().unwrap();
    assert_eq!(fallback.name(), "Bravura");
}

#[test]
fn test_lookup_loads_real_font() {
    let mut provider = SymbolFontsProvider::new();
    provider.add_font("DejaVu", "DejaVu Sans Mono", test_font_path());
    provider.set_fallback_font("dejavu");

    let font = provider.font_by_name("DEJAVU").unwrap();
    assert!(font.is_loaded());
    assert!(font.load_error().is_none());
    assert!(matches!(font.glyph_id('A'), Some(id) if id != 0));
    assert!(font.font_data().unwrap().glyph_count() > 100);
    assert!(provider.is_fallback_font(font.as_ref()));
}

#[test]
fn test_fallback_loads_real_font() {
    let mut provider = SymbolFontsProvider::new();
    provider.add_font("Leland", "Leland", "/nonexistent/Leland.otf");
    provider.add_font("DejaVu", "DejaVu Sans Mono", test_font_path());
    provider.set_fallback_font("DejaVu");

    let font = provider.font_by_name("Bravura").unwrap();
    assert_eq!(font.name(), "DejaVu");
    assert!(font.is_loaded());
}

#[test]
fn test_loaded_font_is_not_reloaded() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("copy.ttf");
    fs::copy(test_font_path(), &path).unwrap();

    let mut provider = SymbolFontsProvider::new();
    provider.add_font("Copy", "DejaVu Sans Mono", &path);
    provider.set_fallback_font("Copy");

    let first = provider.font_by_name("copy").unwrap();
    let first_bytes = first.font_data().unwrap().bytes().as_ptr();

    // Later lookups reuse the loaded data even though the file is gone
    fs::remove_file(&path).unwrap();
    let second = provider.font_by_name("COPY").unwrap();
    assert!(second.is_loaded());
    assert_eq!(second.font_data().unwrap().bytes().as_ptr(), first_bytes);
    assert!(second.load_error().is_none());
}

#[test]
fn test_load_all_reports_success() {
    let mut provider = SymbolFontsProvider::new();
    provider.add_font("DejaVu", "DejaVu Sans Mono", test_font_path());
    provider.add_font("Missing", "Missing", "/nonexistent/missing.otf");

    let reports = provider.load_all();
    assert!(reports[0].is_ok());
    assert_eq!(reports[0].error, None);
    assert!(!reports[1].is_ok());
    assert!(provider.fonts()[0].is_loaded());
}
