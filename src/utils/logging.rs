//! `log` facade backend.
//!
//! Records go to the browser console on wasm32 and to stderr elsewhere.

use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::config::LOG_LEVEL;

/// Console logger for the whole application.
pub struct ConsoleLogger {
    level: LevelFilter,
}

static LOGGER: ConsoleLogger = ConsoleLogger { level: LOG_LEVEL };

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!("[{}] {}: {}", record.level(), record.target(), record.args());
        write_line(record.level(), &line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: Level, line: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let value = JsValue::from_str(line);
    match level {
        Level::Error => console::error_1(&value),
        Level::Warn => console::warn_1(&value),
        Level::Info => console::info_1(&value),
        Level::Debug | Level::Trace => console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the console logger. Call once at startup.
pub fn init() {
    match log::set_logger(&LOGGER) {
        Ok(()) => log::set_max_level(LOGGER.level),
        Err(_) => log::warn!("logger already initialized"),
    }
}

/// Initialize logging for unit tests.
///
/// This safely no-ops if another logger has already been initialized.
#[cfg(test)]
pub fn init_for_tests() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Debug);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enabled_respects_level() {
        let logger = ConsoleLogger {
            level: LevelFilter::Warn,
        };
        let warn = Metadata::builder().level(Level::Warn).build();
        let info = Metadata::builder().level(Level::Info).build();
        assert!(logger.enabled(&warn));
        assert!(!logger.enabled(&info));
    }

    #[test]
    fn test_init_for_tests_is_idempotent() {
        init_for_tests();
        init_for_tests();
        log::debug!("logging works");
    }
}
