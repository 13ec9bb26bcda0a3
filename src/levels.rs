use std::fmt::Formatter;
use std::str::FromStr;

use crate::error::LoggerError;

/// Canonical lowercase names, indexed by `LogLevel as usize`.
const LEVEL_NAMES: [&str; 6] = ["trace", "debug", "info", "warn", "error", "panic"];

/// Severity of a log message, ordered from least to most severe.
///
/// Comparison follows declaration order, so `LogLevel::Trace < LogLevel::Panic`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    #[default]
    Info = 2,
    Warn = 3,
    Error = 4,
    Panic = 5,
}

impl LogLevel {
    /// Every level, in severity order.
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Panic,
    ];

    /// The canonical lowercase name, as accepted by name-based lookup.
    pub const fn name(self) -> &'static str {
        LEVEL_NAMES[self as usize]
    }

    /// The label written between brackets in front of every emitted message.
    pub const fn label(self) -> &'static str {
        match self {
            LogLevel::Trace => "Trace",
            LogLevel::Debug => "Debug",
            LogLevel::Info => "Info",
            LogLevel::Warn => "Warning",
            LogLevel::Error => "Error",
            LogLevel::Panic => "Panic",
        }
    }

    /// The six canonical names in severity order.
    pub fn names() -> &'static [&'static str] {
        &LEVEL_NAMES
    }

    /// Looks a level up by name, ignoring case.
    ///
    /// # Errors
    ///
    /// `LoggerError::UnknownLevelName` if `name` is not one of [`LogLevel::names`].
    pub fn from_name(name: &str) -> Result<Self, LoggerError> {
        let lowered = name.to_lowercase();
        LEVEL_NAMES
            .iter()
            .position(|candidate| *candidate == lowered)
            .map(|i| Self::ALL[i])
            .ok_or_else(|| LoggerError::UnknownLevelName {
                requested: name.to_string(),
                valid: Self::names(),
            })
    }

    /// Lines at or below this level carry a microsecond timestamp.
    #[inline]
    pub(crate) const fn wants_timestamps(self) -> bool {
        (self as u8) <= (LogLevel::Debug as u8)
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl TryFrom<u8> for LogLevel {
    type Error = u8;

    fn try_from(raw: u8) -> Result<Self, u8> {
        Self::ALL.get(raw as usize).copied().ok_or(raw)
    }
}
