//! Logging bridge for the `log` facade.
//!
//! All `log::info!()` etc. calls are written to stderr as
//! `[LEVEL] [target] message`, keeping stdout free for command output.
//!
//! Level precedence, highest first:
//! 1. `--log-level` CLI flag
//! 2. `RUST_LOG` environment variable (a single level such as `debug`)
//! 3. `log_level` from the config file, applied once the config is loaded
//! 4. `warn`

use log::{LevelFilter, Log, Metadata, Record};
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::OnceLock;

struct LogBridge {
    sink: Mutex<Box<dyn Write + Send>>,
    /// Set when the CLI flag or RUST_LOG fixed the level; config must not override it
    pinned: bool,
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut sink = self.sink.lock();
        let _ = writeln!(
            sink,
            "[{:<5}] [{}] {}",
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = self.sink.lock().flush();
    }
}

static LOGGER: OnceLock<LogBridge> = OnceLock::new();

/// Install the bridge as the global logger. Calling it again is a no-op.
pub fn init_log_bridge(cli_level: Option<LevelFilter>) {
    let env_level = level_from_env();
    let pinned = cli_level.is_some() || env_level.is_some();
    let level = resolve_level(cli_level, env_level, None);

    let logger = LOGGER.get_or_init(|| LogBridge {
        sink: Mutex::new(Box::new(io::stderr())),
        pinned,
    });
    if log::set_logger(logger).is_ok() {
        log::set_max_level(level);
    }
}

/// Apply the config file's level unless the CLI flag or RUST_LOG already set one.
pub fn apply_config_level(level: LevelFilter) {
    match LOGGER.get() {
        Some(logger) if !logger.pinned => log::set_max_level(level),
        _ => {}
    }
}

/// Pick the effective level from the available sources.
pub fn resolve_level(
    cli_level: Option<LevelFilter>,
    env_level: Option<LevelFilter>,
    config_level: Option<LevelFilter>,
) -> LevelFilter {
    cli_level
        .or(env_level)
        .or(config_level)
        .unwrap_or(LevelFilter::Warn)
}

fn level_from_env() -> Option<LevelFilter> {
    std::env::var("RUST_LOG")
        .ok()
        .and_then(|value| value.trim().parse().ok())
}
