//! Console Logger
//!
//! A `log` backend for browser apps. Each record is timestamped and sent to
//! the matching `console.*` method so devtools level filters keep working.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Logger that writes formatted records to the browser console
pub struct ConsoleLogger {
    app_name: &'static str,
    level: LevelFilter,
}

impl ConsoleLogger {
    pub fn new(app_name: &'static str, level: LevelFilter) -> Self {
        Self { app_name, level }
    }
}

/// Format one log line: `HH:MM:SS.mmm LEVEL [app/target] message`
pub fn format_line(timestamp: &str, app_name: &str, level: Level, target: &str, message: &str) -> String {
    format!("{} {:<5} [{}/{}] {}", timestamp, level, app_name, target, message)
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let timestamp = chrono::Local::now().format("%H:%M:%S%.3f").to_string();
        let line = format_line(
            &timestamp,
            self.app_name,
            record.level(),
            record.target(),
            &record.args().to_string(),
        );
        let line = wasm_bindgen::JsValue::from_str(&line);

        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger as the global `log` backend.
///
/// Fails if another logger was already installed.
pub fn init_logger(app_name: &'static str, level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(ConsoleLogger::new(app_name, level)))?;
    log::set_max_level(level);
    Ok(())
}
