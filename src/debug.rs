//! Logging backend for the termconf CLI
//!
//! Routes `log::info!()` etc. from every crate to stderr, keeping stdout
//! clean for the JSON the CLI prints.
//!
//! The level comes from `--log-level` when given, otherwise from the
//! DEBUG_LEVEL environment variable:
//! - unset: Warnings and errors
//! - 0: Off
//! - 1: Errors only
//! - 2: Info level (files loaded and saved)
//! - 3: Debug level (per-key layering)
//! - 4: Trace level

use std::io::Write;
use std::time::{SystemTime, UNIX_EPOCH};

use log::{LevelFilter, Log, Metadata, Record};

/// Debug level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DebugLevel {
    Off = 0,
    Error = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

impl DebugLevel {
    fn from_env() -> Option<Self> {
        std::env::var("DEBUG_LEVEL")
            .ok()
            .and_then(|val| Self::from_number(val.trim()))
    }

    fn from_number(val: &str) -> Option<Self> {
        match val.parse::<u8>() {
            Ok(0) => Some(DebugLevel::Off),
            Ok(1) => Some(DebugLevel::Error),
            Ok(2) => Some(DebugLevel::Info),
            Ok(3) => Some(DebugLevel::Debug),
            Ok(4) => Some(DebugLevel::Trace),
            _ => None,
        }
    }

    fn filter(self) -> LevelFilter {
        match self {
            DebugLevel::Off => LevelFilter::Off,
            DebugLevel::Error => LevelFilter::Error,
            DebugLevel::Info => LevelFilter::Info,
            DebugLevel::Debug => LevelFilter::Debug,
            DebugLevel::Trace => LevelFilter::Trace,
        }
    }
}

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(
            stderr,
            "[{}] [{:<5}] [{}] {}",
            get_timestamp(),
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

fn get_timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

/// Resolve the effective level: CLI flag first, then DEBUG_LEVEL.
pub fn effective_level(cli_level: Option<LevelFilter>) -> LevelFilter {
    cli_level.unwrap_or_else(|| {
        // Unset keeps warnings visible; settings problems are reported that way
        DebugLevel::from_env().map_or(LevelFilter::Warn, DebugLevel::filter)
    })
}

/// Install the stderr logger. Calling this twice is harmless.
pub fn init_log_bridge(cli_level: Option<LevelFilter>) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(effective_level(cli_level));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_levels() {
        assert_eq!(DebugLevel::from_number("0"), Some(DebugLevel::Off));
        assert_eq!(DebugLevel::from_number("3"), Some(DebugLevel::Debug));
        assert_eq!(DebugLevel::from_number("9"), None);
        assert_eq!(DebugLevel::from_number("verbose"), None);
    }

    #[test]
    fn test_cli_level_wins() {
        assert_eq!(effective_level(Some(LevelFilter::Trace)), LevelFilter::Trace);
    }

    #[test]
    fn test_levels_grow_more_verbose() {
        let levels = [
            DebugLevel::Off,
            DebugLevel::Error,
            DebugLevel::Info,
            DebugLevel::Debug,
            DebugLevel::Trace,
        ];
        for pair in levels.windows(2) {
            assert!(pair[0].filter() < pair[1].filter());
        }
        assert_eq!(DebugLevel::Off.filter(), LevelFilter::Off);
    }
}
