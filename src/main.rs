use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use symfont::cli::{self, Cli};
use symfont::logging;
use symfont_config::FontCatalog;
use symfont_fonts::SymbolFontsProvider;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let rust_log = std::env::var("RUST_LOG").ok();
    let forced_level = logging::level_override(
        cli.log_level.map(|level| level.to_level_filter()),
        rust_log.as_deref(),
    );
    logging::init_log_bridge(forced_level.unwrap_or(log::LevelFilter::Warn));

    let catalog = match &cli.config {
        Some(path) => FontCatalog::load_from(path)
            .with_context(|| format!("failed to load font catalog {}", path.display()))?,
        None => FontCatalog::load()?,
    };
    if forced_level.is_none() {
        logging::set_level(catalog.log_level.to_level_filter());
    }

    log::info!("Starting symfont {}", symfont::VERSION);
    let mut provider = SymbolFontsProvider::from_catalog(&catalog);

    let mut stdout = std::io::stdout().lock();
    let code = cli::run(&cli.command, &mut provider, &mut stdout)?;
    stdout.flush()?;
    log::logger().flush();

    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
