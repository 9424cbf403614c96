//! `log` backend writing to the browser console.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;
use web_sys::console;

use crate::options::OptionsError;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            Level::Error => console::error_1(&line),
            Level::Warn => console::warn_1(&line),
            Level::Info => console::info_1(&line),
            Level::Debug | Level::Trace => console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Parses a level name such as `"warn"` or `"DEBUG"`.
pub fn parse_level(level: &str) -> Result<LevelFilter, OptionsError> {
    level
        .trim()
        .parse()
        .map_err(|_| OptionsError::LogLevel(level.to_string()))
}

/// Installs the console logger (once) and sets the maximum level.
pub fn install(level: LevelFilter) {
    // a second call only adjusts the level
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}
