use std::fmt::Formatter;

pub enum LoggerError {
    /// A level name that is none of the canonical names.
    UnknownLevelName {
        requested: String,
        valid: &'static [&'static str],
    },
    /// The sink refused a flush.
    Io(std::io::Error),
}

fn format_logger_error(l: &LoggerError, fmt: &mut Formatter) -> std::fmt::Result {
    match l {
        LoggerError::UnknownLevelName { requested, valid } => {
            write!(
                fmt,
                "unknown log level name {}: options are [{}]",
                requested,
                valid.join(" ")
            )
        }
        LoggerError::Io(e) => {
            write!(fmt, "IoError: {}", e)
        }
    }
}

impl From<std::io::Error> for LoggerError {
    fn from(e: std::io::Error) -> Self {
        LoggerError::Io(e)
    }
}

impl std::fmt::Display for LoggerError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        format_logger_error(self, f)
    }
}

impl std::fmt::Debug for LoggerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        format_logger_error(self, f)
    }
}

impl std::error::Error for LoggerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoggerError::Io(e) => Some(e),
            LoggerError::UnknownLevelName { .. } => None,
        }
    }
}
