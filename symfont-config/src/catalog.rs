//! Font catalog: the YAML document listing the symbol fonts to register.
//!
//! Covers:
//! - `load` / `load_from` / `save_to` (YAML file I/O with atomic write)
//! - Path helpers (`config_path`, `config_dir`, `resolve_path`)
//! - Semantic validation of entries and the fallback designation

use crate::defaults;
use crate::error::ConfigError;
use crate::types::LogLevel;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// One symbol font registration: a unique-ish name, its family and the file
/// that backs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolFontEntry {
    /// Lookup name, matched case-insensitively
    pub name: String,
    /// Font family name
    pub family: String,
    /// Path to the font file, absolute or relative to `fonts_dir`
    pub path: PathBuf,
    /// Face index within a font collection (.ttc); 0 for single-face files
    #[serde(default)]
    pub face_index: usize,
}

impl SymbolFontEntry {
    pub fn new(
        name: impl Into<String>,
        family: impl Into<String>,
        path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            family: family.into(),
            path: path.into(),
            face_index: 0,
        }
    }

    /// Select a face within a font collection file
    pub fn with_face_index(mut self, face_index: usize) -> Self {
        self.face_index = face_index;
        self
    }
}

/// The symbol font catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontCatalog {
    /// Directory that relative font paths resolve against
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fonts_dir: Option<PathBuf>,

    /// Name of the font substituted when a lookup fails
    #[serde(default = "defaults::fallback_font")]
    pub fallback_font: String,

    /// Diagnostic log level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Registered fonts, in lookup order
    #[serde(default)]
    pub fonts: Vec<SymbolFontEntry>,
}

impl Default for FontCatalog {
    fn default() -> Self {
        Self {
            fonts_dir: None,
            fallback_font: defaults::fallback_font(),
            log_level: LogLevel::default(),
            fonts: defaults::symbol_fonts(),
        }
    }
}

impl FontCatalog {
    /// Create an empty catalog with the default fallback name.
    pub fn empty() -> Self {
        Self {
            fonts: Vec::new(),
            ..Self::default()
        }
    }

    /// Set the directory that relative font paths resolve against
    pub fn with_fonts_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.fonts_dir = Some(dir.into());
        self
    }

    /// Set the fallback font name
    pub fn with_fallback(mut self, name: impl Into<String>) -> Self {
        self.fallback_font = name.into();
        self
    }

    /// Append a font entry
    pub fn with_font(
        mut self,
        name: impl Into<String>,
        family: impl Into<String>,
        path: impl Into<PathBuf>,
    ) -> Self {
        self.fonts.push(SymbolFontEntry::new(name, family, path));
        self
    }

    /// Load the catalog from the default location, creating it if missing.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        log::info!("Font catalog path: {:?}", path);

        if path.exists() {
            Self::load_from(&path)
                .with_context(|| format!("failed to load font catalog {}", path.display()))
        } else {
            log::info!("Font catalog not found, creating default at {:?}", path);
            let catalog = Self::default();
            catalog
                .save_to(&path)
                .with_context(|| format!("failed to write default catalog {}", path.display()))?;
            Ok(catalog)
        }
    }

    /// Load and validate a catalog from a specific file.
    pub fn load_from(path: &Path) -> std::result::Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let catalog = Self::from_yaml(&contents)?;
        log::debug!(
            "Loaded font catalog with {} fonts from {:?}",
            catalog.fonts.len(),
            path
        );
        Ok(catalog)
    }

    /// Parse and validate a catalog from YAML text.
    pub fn from_yaml(contents: &str) -> std::result::Result<Self, ConfigError> {
        let catalog: FontCatalog = serde_yaml_ng::from_str(contents)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Save the catalog to a specific file.
    pub fn save_to(&self, path: &Path) -> std::result::Result<(), ConfigError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml_ng::to_string(self)?;

        // Write to a temp file then rename so a crash never leaves a truncated catalog
        let temp_path = path.with_extension("yaml.tmp");
        fs::write(&temp_path, &yaml)?;
        fs::rename(&temp_path, path)?;

        Ok(())
    }

    /// Check entries and the fallback designation.
    ///
    /// Empty names are rejected. Duplicate names and a fallback that matches
    /// no entry are only warned about: lookups take the first match, and the
    /// fallback may be registered later.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.fallback_font.trim().is_empty() {
            return Err(ConfigError::Validation(
                "fallback_font must not be empty".to_string(),
            ));
        }

        let mut seen: Vec<String> = Vec::with_capacity(self.fonts.len());
        for (idx, entry) in self.fonts.iter().enumerate() {
            if entry.name.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "fonts[{idx}]: name must not be empty"
                )));
            }
            if entry.path.as_os_str().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "fonts[{idx}] '{}': path must not be empty",
                    entry.name
                )));
            }

            let lowered = entry.name.to_lowercase();
            if seen.contains(&lowered) {
                log::warn!(
                    "Duplicate symbol font name '{}' in catalog; the first entry wins",
                    entry.name
                );
            } else {
                seen.push(lowered);
            }
        }

        if !seen.contains(&self.fallback_font.to_lowercase()) {
            log::warn!(
                "Fallback font '{}' is not listed in the catalog",
                self.fallback_font
            );
        }

        Ok(())
    }

    /// Resolve an entry's file path.
    ///
    /// A leading `~/` expands to the home directory. Relative paths are
    /// joined onto `fonts_dir` when one is configured.
    pub fn resolve_path(&self, entry: &SymbolFontEntry) -> PathBuf {
        let path = expand_home(&entry.path);
        if path.is_absolute() {
            return path;
        }
        match &self.fonts_dir {
            Some(dir) => expand_home(dir).join(path),
            None => path,
        }
    }

    /// Get the catalog file path: `<config dir>/symfont/fonts.yaml`
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("fonts.yaml")
    }

    /// Get the configuration directory path
    pub fn config_dir() -> PathBuf {
        if let Some(config_dir) = dirs::config_dir() {
            config_dir.join("symfont")
        } else {
            PathBuf::from(".")
        }
    }
}

fn expand_home(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}
