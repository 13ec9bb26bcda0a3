use std::fmt::{Arguments, Display, Write as _};
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use chrono::Local;

pub use crate::error::LoggerError;
pub use crate::levels::LogLevel;
use crate::sync::LevelCell;

#[cfg(feature = "singleton")]
use lazy_static::lazy_static;

/// Date, time and microseconds, e.g. `2026/10/17 09:12:44.120931`.
const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S%.6f";

/// A leveled logger writing whole lines to a single sink.
///
/// Messages below the current threshold are dropped before they are formatted.
/// While the threshold is `Debug` or finer every line is prefixed with a
/// microsecond timestamp.
///
/// Each line is rendered up front and written with one call while the sink is
/// locked, so lines from concurrent callers never interleave.
pub struct Logger {
    level: LevelCell,
    sink: Mutex<Box<dyn Write + Send>>,
}

impl Logger {
    /// Constructs a new `Logger` writing to `sink`, starting at `LogLevel::Info`.
    ///
    /// The sink is fixed for the lifetime of the logger.
    pub fn new<W>(sink: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self {
            level: LevelCell::default(),
            sink: Mutex::new(Box::new(sink)),
        }
    }

    /// Constructs a `Logger` writing to the process's standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// Sets the threshold.
    ///
    /// A notice naming the new level is always written, whatever the level.
    /// The notice is written before the level is stored and the two steps are
    /// not ordered together, so when two calls race the last notice on the
    /// sink may name a different level than the one left in effect.
    ///
    /// # Arguments
    ///
    /// * `level` - The new minimum level that will be emitted.
    pub fn set_level(&self, level: LogLevel) {
        self.write_line(&format!("LOGGER: Setting the log level to {}\n", level.name()));
        self.level.store(level);
    }

    /// Sets the threshold from one of [`LogLevel::names`], ignoring case.
    ///
    /// # Errors
    ///
    /// `LoggerError::UnknownLevelName` when `name` matches no level. The
    /// threshold is left untouched and no notice is written.
    pub fn set_level_by_name(&self, name: &str) -> Result<(), LoggerError> {
        let level = LogLevel::from_name(name)?;
        self.set_level(level);
        Ok(())
    }

    /// The current threshold.
    ///
    /// # Returns
    ///
    /// The lowest `LogLevel` that is currently written.
    pub fn level(&self) -> LogLevel {
        self.level.load()
    }

    /// The canonical level names, from `trace` to `panic`.
    ///
    /// # Returns
    ///
    /// The same six names whatever the threshold.
    pub fn level_names(&self) -> &'static [&'static str] {
        LogLevel::names()
    }

    /// Whether lines currently carry a timestamp. Follows the threshold.
    pub fn timestamps(&self) -> bool {
        self.level().wants_timestamps()
    }

    /// Whether a message at `level` would be written right now.
    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        self.level() <= level
    }

    /// Logs a message at trace level.
    ///
    /// # Arguments
    ///
    /// * `args` - The message, usually built with `format_args!`. It is only
    ///   rendered when the threshold lets the line through.
    #[track_caller]
    pub fn trace(&self, args: Arguments<'_>) {
        self.emit(LogLevel::Trace, args);
    }

    /// Logs a message at debug level.
    ///
    /// # Arguments
    ///
    /// * `args` - The message, usually built with `format_args!`. It is only
    ///   rendered when the threshold lets the line through.
    #[track_caller]
    pub fn debug(&self, args: Arguments<'_>) {
        self.emit(LogLevel::Debug, args);
    }

    /// Logs a message at info level.
    ///
    /// # Arguments
    ///
    /// * `args` - The message, usually built with `format_args!`. It is only
    ///   rendered when the threshold lets the line through.
    #[track_caller]
    pub fn info(&self, args: Arguments<'_>) {
        self.emit(LogLevel::Info, args);
    }

    /// Logs a message at warning level. The line is labelled `[Warning]`.
    ///
    /// # Arguments
    ///
    /// * `args` - The message, usually built with `format_args!`. It is only
    ///   rendered when the threshold lets the line through.
    #[track_caller]
    pub fn warn(&self, args: Arguments<'_>) {
        self.emit(LogLevel::Warn, args);
    }

    /// Logs a message at error level.
    ///
    /// # Arguments
    ///
    /// * `args` - The message, usually built with `format_args!`. It is only
    ///   rendered when the threshold lets the line through.
    #[track_caller]
    pub fn error(&self, args: Arguments<'_>) {
        self.emit(LogLevel::Error, args);
    }

    /// Writes the message at `LogLevel::Panic`, then panics with the
    /// formatted message as a `String` payload.
    ///
    /// `Panic` is the highest level, so the threshold can never filter this
    /// call out and it always unwinds.
    #[track_caller]
    pub fn panic(&self, args: Arguments<'_>) -> ! {
        let message = args.to_string();
        let threshold = self.level();
        if threshold <= LogLevel::Panic {
            self.write_message(LogLevel::Panic, &message, threshold.wants_timestamps());
        }
        std::panic::panic_any(message)
    }

    /// Emits at a level chosen at runtime. `LogLevel::Panic` goes through
    /// [`Logger::panic`] and does not return.
    #[track_caller]
    pub fn log(&self, level: LogLevel, args: Arguments<'_>) {
        match level {
            LogLevel::Panic => self.panic(args),
            _ => self.emit(level, args),
        }
    }

    /// Flushes the sink.
    ///
    /// # Errors
    ///
    /// `LoggerError::Io` if the underlying writer fails to flush.
    pub fn flush(&self) -> Result<(), LoggerError> {
        self.sink
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .flush()?;
        Ok(())
    }

    #[track_caller]
    fn emit(&self, level: LogLevel, args: Arguments<'_>) {
        // One load, so the filter and the timestamp decision agree.
        let threshold = self.level();
        if threshold > level {
            return;
        }
        self.write_message(level, args, threshold.wants_timestamps());
    }

    #[track_caller]
    fn write_message(&self, level: LogLevel, message: impl Display, stamped: bool) {
        let mut line = String::with_capacity(64);
        if stamped {
            let _ = write!(line, "{} ", Local::now().format(TIMESTAMP_FORMAT));
        }
        #[cfg(feature = "caller_location")]
        {
            let caller = std::panic::Location::caller();
            let _ = write!(line, "{}:{}: ", caller.file(), caller.line());
        }
        let _ = write!(line, "[{}] {}", level.label(), message);
        if !line.ends_with('\n') {
            line.push('\n');
        }
        self.write_line(&line);
    }

    /// Writes one already terminated line while holding the sink.
    ///
    /// Sink failures are dropped: emitting never reports errors.
    fn write_line(&self, line: &str) {
        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = sink.write_all(line.as_bytes());
        let _ = sink.flush();
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::stdout()
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "singleton")]
lazy_static! {
    static ref LOGGER: Logger = Logger::stdout();
}

/// The process-wide logger, writing to stdout. Created at `LogLevel::Info`
/// on first use.
#[cfg(feature = "singleton")]
pub fn logger() -> &'static Logger {
    &LOGGER
}

/// Sets the threshold of the process-wide logger. See [`Logger::set_level`].
#[cfg(feature = "singleton")]
pub fn set_log_level(level: LogLevel) {
    logger().set_level(level);
}

/// Sets the threshold of the process-wide logger by name.
///
/// # Errors
///
/// `LoggerError::UnknownLevelName`, see [`Logger::set_level_by_name`].
#[cfg(feature = "singleton")]
pub fn set_log_level_by_name(name: &str) -> Result<(), LoggerError> {
    logger().set_level_by_name(name)
}

/// The threshold of the process-wide logger.
#[cfg(feature = "singleton")]
pub fn get_log_level() -> LogLevel {
    logger().level()
}

/// The six canonical level names, in severity order.
#[cfg(feature = "singleton")]
pub fn get_log_level_names() -> &'static [&'static str] {
    LogLevel::names()
}

/// Whether the process-wide logger would write a message at `level`.
#[cfg(feature = "singleton")]
pub fn log_enabled(level: LogLevel) -> bool {
    logger().enabled(level)
}
