use crate::render::Color;
use chrono::{DateTime, Local};
use std::fmt;

/// Closed set of severity labels understood by the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Verbose,
    Debug,
    Information,
    Warning,
    Error,
    Fatal,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Verbose => "Verbose",
            LogLevel::Debug => "Debug",
            LogLevel::Information => "Information",
            LogLevel::Warning => "Warning",
            LogLevel::Error => "Error",
            LogLevel::Fatal => "Fatal",
        }
    }

    /// Color of the Level cell. Total over the enum; anything below Warning
    /// renders neutral.
    pub fn color(self) -> Color {
        match self {
            LogLevel::Warning => Color::AMBER,
            LogLevel::Error | LogLevel::Fatal => Color::RED,
            _ => Color::WHITE,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<tracing::Level> for LogLevel {
    fn from(level: tracing::Level) -> Self {
        if level == tracing::Level::TRACE {
            LogLevel::Verbose
        } else if level == tracing::Level::DEBUG {
            LogLevel::Debug
        } else if level == tracing::Level::INFO {
            LogLevel::Information
        } else if level == tracing::Level::WARN {
            LogLevel::Warning
        } else {
            LogLevel::Error
        }
    }
}

/// A log event as handed over by a producer. Read once during projection,
/// never retained afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct RawLogEvent {
    pub timestamp: DateTime<Local>,
    pub level: LogLevel,
    pub message: String,
    pub exception: Option<String>,
}

impl RawLogEvent {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            level,
            message: message.into(),
            exception: None,
        }
    }

    pub fn with_exception(mut self, exception: impl Into<String>) -> Self {
        self.exception = Some(exception.into());
        self
    }
}

/// Display-ready projection of one event. Immutable once constructed; owned
/// by the draw buffer from construction until eviction.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub timestamp: DateTime<Local>,
    pub timestamp_display: String,
    pub level: LogLevel,
    pub level_color: Color,
    pub message: String,
    pub exception: String,
}

impl From<RawLogEvent> for LogRecord {
    fn from(event: RawLogEvent) -> Self {
        Self {
            timestamp: event.timestamp,
            timestamp_display: event.timestamp.format("%H:%M:%S%.3f").to_string(),
            level: event.level,
            level_color: event.level.color(),
            message: event.message,
            exception: event.exception.unwrap_or_default(),
        }
    }
}
