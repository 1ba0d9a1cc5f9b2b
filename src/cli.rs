//! Command-line interface for symfont.
//!
//! Parses arguments and runs the inspection subcommands against a registry
//! built from the font catalog.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use symfont_fonts::{SymbolFontHandle, SymbolFontsProvider};

/// symfont - Symbol font registry for music engraving
#[derive(Parser)]
#[command(name = "symfont")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Font catalog to use (default: <config dir>/symfont/fonts.yaml)
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Set log level (overrides catalog and RUST_LOG)
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevelArg>,
}

/// Log level argument for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevelArg {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevelArg {
    /// Convert to `log::LevelFilter`
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevelArg::Off => log::LevelFilter::Off,
            LogLevelArg::Error => log::LevelFilter::Error,
            LogLevelArg::Warn => log::LevelFilter::Warn,
            LogLevelArg::Info => log::LevelFilter::Info,
            LogLevelArg::Debug => log::LevelFilter::Debug,
            LogLevelArg::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Commands {
    /// List registered symbol fonts in lookup order
    List,

    /// Show which font a name resolves to
    Resolve {
        /// Font name (case-insensitive)
        name: String,
    },

    /// Show the fallback font
    Fallback,

    /// Load every registered font and report failures
    Check,
}

/// Run a subcommand, writing its report to `out`.
///
/// Returns the process exit code. An unresolvable fallback is returned as
/// an error.
pub fn run(
    command: &Commands,
    provider: &mut SymbolFontsProvider,
    out: &mut impl Write,
) -> Result<i32> {
    match command {
        Commands::List => list(provider, out),
        Commands::Resolve { name } => resolve(provider, name, out),
        Commands::Fallback => fallback(provider, out),
        Commands::Check => check(provider, out),
    }
}

fn list(provider: &mut SymbolFontsProvider, out: &mut impl Write) -> Result<i32> {
    // Checked once so an unregistered fallback does not log per row
    let fallback_known = provider.contains(provider.fallback_name());
    for font in provider.fonts() {
        let marker = if fallback_known && provider.is_fallback_font(font.as_ref()) {
            '*'
        } else {
            ' '
        };
        writeln!(
            out,
            "{} {:<20} {:<20} {}",
            marker,
            font.name(),
            font.family(),
            font.file_path().display()
        )?;
    }
    Ok(0)
}

fn resolve(provider: &mut SymbolFontsProvider, name: &str, out: &mut impl Write) -> Result<i32> {
    let direct = provider.contains(name);
    let font = provider.font_by_name(name)?;
    writeln!(
        out,
        "{} -> {}{}",
        name,
        font.name(),
        if direct { "" } else { " (fallback)" }
    )?;
    write_load_status(font.as_ref(), out)?;
    Ok(0)
}

fn fallback(provider: &mut SymbolFontsProvider, out: &mut impl Write) -> Result<i32> {
    let font = provider.fallback_font()?;
    writeln!(out, "fallback: {}", font.name())?;
    write_load_status(font.as_ref(), out)?;
    Ok(0)
}

fn check(provider: &mut SymbolFontsProvider, out: &mut impl Write) -> Result<i32> {
    let reports = provider.load_all();
    let mut failures = 0;
    for report in &reports {
        match &report.error {
            None => writeln!(out, "ok      {}", report.name)?,
            Some(err) => {
                failures += 1;
                writeln!(out, "FAILED  {}: {}", report.name, err)?;
            }
        }
    }

    if let Err(e) = provider.fallback_font() {
        failures += 1;
        writeln!(out, "FAILED  fallback: {}", e)?;
    }

    writeln!(out, "{} fonts, {} failures", reports.len(), failures)?;
    Ok(if failures == 0 { 0 } else { 1 })
}

fn write_load_status(font: &dyn SymbolFontHandle, out: &mut impl Write) -> Result<()> {
    writeln!(out, "  family: {}", font.family())?;
    writeln!(out, "  path:   {}", font.file_path().display())?;
    match (font.font_data(), font.load_error()) {
        (Some(data), _) => writeln!(out, "  status: loaded ({} glyphs)", data.glyph_count())?,
        (None, Some(err)) => writeln!(out, "  status: not loaded ({})", err)?,
        (None, None) => writeln!(out, "  status: not loaded")?,
    }
    Ok(())
}
