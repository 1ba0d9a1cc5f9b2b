//! Log bridge: routes `log::info!()` and friends to stderr.
//!
//! Level precedence: `--log-level` flag, then `RUST_LOG`, then the catalog's
//! `log_level` (applied once the catalog has been loaded).

use std::io::{self, Write};
use std::sync::OnceLock;

use chrono::Local;
use log::{LevelFilter, Log, Metadata, Record};
use parking_lot::Mutex;
use symfont_config::LogLevel;

struct BridgeLogger {
    out: Mutex<Box<dyn Write + Send>>,
}

impl Log for BridgeLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut out = self.out.lock();
        // Nowhere to report a failed diagnostic write
        let _ = writeln!(
            out,
            "[{}] [{:<5}] [{}] {}",
            Local::now().format("%H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = self.out.lock().flush();
    }
}

static LOGGER: OnceLock<BridgeLogger> = OnceLock::new();

/// Install the log bridge with an initial level.
///
/// Safe to call more than once; later calls only change the level.
pub fn init_log_bridge(level: LevelFilter) {
    let logger = LOGGER.get_or_init(|| BridgeLogger {
        out: Mutex::new(Box::new(io::stderr())),
    });
    if log::set_logger(logger).is_err() {
        log::debug!("Log bridge already installed");
    }
    set_level(level);
}

/// Change the active level.
pub fn set_level(level: LevelFilter) {
    log::set_max_level(level);
}

/// Level forced by the command line or environment, if any.
///
/// `cli` wins over `rust_log`. A `RUST_LOG` value that is not a plain level
/// name (as accepted by the catalog) is ignored.
pub fn level_override(cli: Option<LevelFilter>, rust_log: Option<&str>) -> Option<LevelFilter> {
    cli.or_else(|| rust_log.and_then(LogLevel::from_name).map(LogLevel::to_level_filter))
}
