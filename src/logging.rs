use std::{
    fmt::Display,
    io::{self, Write},
    str::FromStr,
    sync::Arc,
};

use parking_lot::Mutex;

const RESET: &str = "\x1b[0m";

/// The severity of a log message, ordered from least to most severe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    /// Detailed progress information (blue).
    Debug,
    /// Normal progress information (green).
    #[default]
    Info,
    /// Something unexpected that does not stop the program (yellow).
    Warning,
    /// A failed operation (red).
    Error,
    /// A failure the program cannot recover from (white on red).
    Critical,
}

impl LogLevel {
    /// The upper-case name printed before each message.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        }
    }
    /// The ANSI escape sequence that starts a message of this level.
    pub const fn color(&self) -> &'static str {
        match self {
            Self::Debug => "\x1b[94m",
            Self::Info => "\x1b[92m",
            Self::Warning => "\x1b[93m",
            Self::Error => "\x1b[91m",
            Self::Critical => "\x1b[1;41m",
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error returned when a string does not name a [`LogLevel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLogLevelError(pub String);

impl Display for ParseLogLevelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid logging level '{}'", self.0)
    }
}

impl std::error::Error for ParseLogLevelError {}

impl FromStr for LogLevel {
    type Err = ParseLogLevelError;

    /// Parses a level name, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(Self::Debug),
            "INFO" => Ok(Self::Info),
            "WARNING" => Ok(Self::Warning),
            "ERROR" => Ok(Self::Error),
            "CRITICAL" => Ok(Self::Critical),
            _ => Err(ParseLogLevelError(s.to_string())),
        }
    }
}

/// A logging context with a level filter, a colored formatter and a writer sink.
///
/// Every message at or above the configured level is written as a single line of the form
/// `<color>LEVEL: message<reset>`. Cloning a [`Logger`] shares its sink, so clones can be handed
/// to observers while the driver keeps logging through the original.
///
/// ```rust
/// use swarmbench::logging::{LogLevel, Logger};
///
/// let logger = Logger::new(LogLevel::Warning);
/// logger.info("not printed");
/// logger.warning("printed to stderr");
/// ```
#[derive(Clone)]
pub struct Logger {
    level: LogLevel,
    sink: Arc<Mutex<dyn Write + Send>>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::default())
    }
}

impl Logger {
    /// A logger writing to standard error.
    pub fn new(level: LogLevel) -> Self {
        Self::with_sink(level, io::stderr())
    }

    /// A logger writing to the given sink.
    pub fn with_sink<W: Write + Send + 'static>(level: LogLevel, sink: W) -> Self {
        Self {
            level,
            sink: Arc::new(Mutex::new(sink)),
        }
    }

    /// A logger whose level is parsed from `level`, writing to standard error.
    ///
    /// An unknown level falls back to [`LogLevel::Info`] and a warning is logged.
    pub fn from_level_str(level: &str) -> Self {
        Self::from_level_str_with_sink(level, io::stderr())
    }

    /// Like [`Logger::from_level_str`], writing to the given sink.
    pub fn from_level_str_with_sink<W: Write + Send + 'static>(level: &str, sink: W) -> Self {
        match level.parse::<LogLevel>() {
            Ok(parsed) => Self::with_sink(parsed, sink),
            Err(_) => {
                let logger = Self::with_sink(LogLevel::Info, sink);
                logger.warning(format!(
                    "Invalid logging level '{level}'. Defaulting to 'INFO'."
                ));
                logger
            }
        }
    }

    /// The minimum level that is written.
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Whether a message at `level` would be written.
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.level
    }

    /// Write `message` at the given level. Failures to write are ignored.
    pub fn log(&self, level: LogLevel, message: impl Display) {
        if !self.enabled(level) {
            return;
        }
        let mut sink = self.sink.lock();
        let _ = writeln!(sink, "{}{}: {}{}", level.color(), level.name(), message, RESET);
        let _ = sink.flush();
    }

    /// Log at [`LogLevel::Debug`].
    pub fn debug(&self, message: impl Display) {
        self.log(LogLevel::Debug, message);
    }
    /// Log at [`LogLevel::Info`].
    pub fn info(&self, message: impl Display) {
        self.log(LogLevel::Info, message);
    }
    /// Log at [`LogLevel::Warning`].
    pub fn warning(&self, message: impl Display) {
        self.log(LogLevel::Warning, message);
    }
    /// Log at [`LogLevel::Error`].
    pub fn error(&self, message: impl Display) {
        self.log(LogLevel::Error, message);
    }
    /// Log at [`LogLevel::Critical`].
    pub fn critical(&self, message: impl Display) {
        self.log(LogLevel::Critical, message);
    }
}
