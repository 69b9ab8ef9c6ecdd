#![cfg(feature = "std")]

//! Stderr backend for the `log` facade.

use std::env;
use std::io::{self, Write};

use log::{LevelFilter, Log, Metadata, Record};

const LEVEL_VAR: &str = "BROADSIDE_LOG";

/// Writes `LEVEL target: message` lines to stderr so they never mix with
/// prompts and boards on stdout.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut err = io::stderr().lock();
        let _ = writeln!(err, "{:<5} {}: {}", record.level(), record.target(), record.args());
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

/// Level named by `value` (`off`, `error` .. `trace`, any case), else `default`.
fn level_from(value: Option<&str>, default: LevelFilter) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Install the stderr logger. `BROADSIDE_LOG` overrides `default`.
/// Returns the level in effect; a second call keeps the first logger.
pub fn init_logging(default: LevelFilter) -> LevelFilter {
    let level = level_from(env::var(LEVEL_VAR).ok().as_deref(), default);
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
    level
}
