use std::sync::{Arc, OnceLock};

/// Receiver of the bridge's log records on the host side.
///
/// The bridge logs through the `log` facade; once a `Logger` is installed with
/// [`set_logger`] every record is forwarded to it.
///
/// # Examples
///
/// ```rust
/// use mediabridge_core::logger::{Logger, LogLevel};
///
/// struct StderrLogger;
///
/// impl Logger for StderrLogger {
///     fn log(&self, level: LogLevel, message: String) {
///         eprintln!("[{:?}] {}", level, message);
///     }
/// }
/// ```
///
/// ## Swift
///
/// ```swift
/// final class MediaBridgeLogger: MediaBridge.Logger {
///     static let shared = MediaBridgeLogger()
///
///     func log(level: MediaBridge.LogLevel, message: String) {
///         NSLog("[mediabridge] %@", message)
///     }
/// }
/// ```
///
/// ## Kotlin
///
/// ```kotlin
/// object MediaBridgeLogger : Logger {
///     override fun log(level: LogLevel, message: String) {
///         Log.println(level.toPriority(), "mediabridge", message)
///     }
/// }
/// ```
///
/// Call `setLogger` once, before the first bridge is created.
#[uniffi::export(with_foreign)]
pub trait Logger: Sync + Send {
    /// Receives one log record.
    fn log(&self, level: LogLevel, message: String);
}

/// Severity of a log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, uniffi::Enum)]
pub enum LogLevel {
    /// Very detailed tracing of the command flow.
    Trace,
    /// Dispatch and transaction details.
    Debug,
    /// Notable events such as a declined permission prompt.
    Info,
    /// Refused or failed operations.
    Warn,
    /// Errors.
    Error,
}

impl From<log::Level> for LogLevel {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Self::Error,
            log::Level::Warn => Self::Warn,
            log::Level::Info => Self::Info,
            log::Level::Debug => Self::Debug,
            log::Level::Trace => Self::Trace,
        }
    }
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Self::Error,
            LogLevel::Warn => Self::Warn,
            LogLevel::Info => Self::Info,
            LogLevel::Debug => Self::Debug,
            LogLevel::Trace => Self::Trace,
        }
    }
}

/// Forwards `log` records to the installed [`Logger`].
struct ForeignLogger;

/// Debug and trace records are only forwarded from the bridge's own modules,
/// so chatty dependencies stay quiet.
fn should_forward(module_path: Option<&str>, level: log::Level) -> bool {
    level <= log::Level::Info
        || module_path.is_some_and(|path| path.starts_with("mediabridge"))
}

impl log::Log for ForeignLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) || !should_forward(record.module_path(), record.level())
        {
            return;
        }

        match LOGGER_INSTANCE.get() {
            Some(logger) => logger.log(record.level().into(), record.args().to_string()),
            None => eprintln!("mediabridge logger not set: {}", record.args()),
        }
    }

    fn flush(&self) {}
}

static LOGGER_INSTANCE: OnceLock<Arc<dyn Logger>> = OnceLock::new();

/// Installs the host logger and sets the most verbose level forwarded
/// (`Debug` when `max_level` is `None`).
///
/// Only the first call installs a logger; later calls just adjust the level.
#[uniffi::export]
pub fn set_logger(logger: Arc<dyn Logger>, max_level: Option<LogLevel>) {
    if LOGGER_INSTANCE.set(logger).is_ok() {
        static LOGGER: ForeignLogger = ForeignLogger;
        if let Err(e) = log::set_logger(&LOGGER) {
            eprintln!("Failed to set mediabridge logger: {e}");
        }
    } else {
        eprintln!("mediabridge logger already set");
    }
    log::set_max_level(max_level.unwrap_or(LogLevel::Debug).into());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_forward() {
        assert!(should_forward(Some("mediabridge_core::writer"), log::Level::Debug));
        assert!(should_forward(Some("tokio::runtime"), log::Level::Warn));
        assert!(!should_forward(Some("tokio::runtime"), log::Level::Trace));
        assert!(!should_forward(None, log::Level::Debug));
    }

    #[test]
    fn test_level_conversions() {
        assert_eq!(LogLevel::from(log::Level::Warn), LogLevel::Warn);
        assert_eq!(log::LevelFilter::from(LogLevel::Trace), log::LevelFilter::Trace);
        assert!(LogLevel::Debug < LogLevel::Error);
    }
}
