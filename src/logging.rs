//! Structured logging for the flood monitoring dashboard.
//!
//! Provides context-rich logging with a source tag, optional location name,
//! timestamps, and severity levels. While the terminal UI is active the
//! console belongs to the dashboard, so console output can be switched off
//! and entries go to the log file only.

use chrono::Utc;
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::str::FromStr;
use std::sync::Mutex;

use crate::alert::thresholds::FloodAlert;

// ---------------------------------------------------------------------------
// Log Levels
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warning => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warning),
            "error" => Ok(LogLevel::Error),
            other => Err(format!("unknown log level '{}'", other)),
        }
    }
}

// ---------------------------------------------------------------------------
// Log Sources
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSource {
    Simulator,
    Session,
    Ui,
    Config,
    System,
}

impl fmt::Display for LogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogSource::Simulator => write!(f, "SIM"),
            LogSource::Session => write!(f, "SESSION"),
            LogSource::Ui => write!(f, "UI"),
            LogSource::Config => write!(f, "CONFIG"),
            LogSource::System => write!(f, "SYS"),
        }
    }
}

// ---------------------------------------------------------------------------
// Logger Configuration
// ---------------------------------------------------------------------------

/// Global logger instance
static LOGGER: Mutex<Option<Logger>> = Mutex::new(None);

pub struct Logger {
    /// Minimum log level to record
    min_level: LogLevel,
    /// Optional file path for logging
    log_file: Option<String>,
    /// Whether warnings and errors are echoed to stderr
    console: bool,
}

impl Logger {
    /// Initialize the global logger
    pub fn init(min_level: LogLevel, log_file: Option<String>, console: bool) {
        let logger = Logger {
            min_level,
            log_file,
            console,
        };
        if let Ok(mut slot) = LOGGER.lock() {
            *slot = Some(logger);
        }
    }

    fn log(&self, level: LogLevel, source: &LogSource, location: Option<&str>, message: &str) {
        if level < self.min_level {
            return;
        }
        let entry = format_entry(&Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(), level, source, location, message);

        if self.console && level >= LogLevel::Warning {
            eprintln!("{}", entry);
        }

        if let Some(ref path) = self.log_file {
            if let Err(e) = Self::append_to_file(path, &entry) {
                if self.console {
                    eprintln!("Failed to write to log file {}: {}", path, e);
                }
            }
        }
    }

    /// Switches stderr echo on or off; the log file is unaffected.
    pub fn set_console(&mut self, enabled: bool) {
        self.console = enabled;
    }

    fn append_to_file(path: &str, entry: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        writeln!(file, "{}", entry)?;
        Ok(())
    }
}

/// Formats one log line, e.g.
/// `2024-12-01 09:00:00 UTC WARN SIM [Adyar]: reading updated`.
fn format_entry(
    timestamp: &str,
    level: LogLevel,
    source: &LogSource,
    location: Option<&str>,
    message: &str,
) -> String {
    let location_part = location.map(|l| format!(" [{}]", l)).unwrap_or_default();
    format!("{} {} {}{}: {}", timestamp, level, source, location_part, message)
}

// ---------------------------------------------------------------------------
// Public Logging Functions
// ---------------------------------------------------------------------------

/// Initialize the global logger
pub fn init_logger(min_level: LogLevel, log_file: Option<&str>, console: bool) {
    Logger::init(min_level, log_file.map(String::from), console);
}

/// Switches stderr echo on or off, e.g. around the terminal UI.
pub fn set_console(enabled: bool) {
    if let Ok(mut slot) = LOGGER.lock() {
        if let Some(logger) = slot.as_mut() {
            logger.set_console(enabled);
        }
    }
}

fn emit(level: LogLevel, source: LogSource, location: Option<&str>, message: &str) {
    if let Ok(slot) = LOGGER.lock() {
        if let Some(logger) = slot.as_ref() {
            logger.log(level, &source, location, message);
        }
    }
}

/// Log a general informational message
pub fn info(source: LogSource, location: Option<&str>, message: &str) {
    emit(LogLevel::Info, source, location, message);
}

/// Log a warning message
pub fn warn(source: LogSource, location: Option<&str>, message: &str) {
    emit(LogLevel::Warning, source, location, message);
}

/// Log an error message
pub fn error(source: LogSource, location: Option<&str>, message: &str) {
    emit(LogLevel::Error, source, location, message);
}

/// Log a debug message
pub fn debug(source: LogSource, location: Option<&str>, message: &str) {
    emit(LogLevel::Debug, source, location, message);
}

/// Log a threshold breach. Alerts are advisory, so they go out at WARN.
pub fn log_alert(alert: &FloodAlert) {
    warn(LogSource::Ui, Some(&alert.location), &alert.message);
}
