//! Run log for the renamer.
//!
//! The logger is an ordinary value owned by whoever drives a batch, not a
//! global. Every record goes to the console (stderr) and, when configured, is
//! appended to a log file. Records are also kept in memory so callers and
//! tests can inspect what was reported.

use anyhow::{Context, Result};
use chrono::Local;
use nu_ansi_term::Color;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};

/// Name stamped on every record.
pub const LOGGER_NAME: &str = "aem_rename";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    pub fn to_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
        }
    }

    fn color(self) -> Color {
        match self {
            Self::Debug => Color::DarkGray,
            Self::Info => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            _ => Err(format!("Unknown log level: {}", s)),
        }
    }
}

/// One emitted record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub timestamp: String,
    pub name: String,
    pub level: LogLevel,
    pub message: String,
}

impl LogEntry {
    /// `<timestamp> - <name> - <LEVEL>: <message>`
    pub fn format_line(&self) -> String {
        format!(
            "{} - {} - {}: {}",
            self.timestamp,
            self.name,
            self.level.to_str(),
            self.message
        )
    }

    fn format_colored(&self) -> String {
        format!(
            "{} - {} - {}: {}",
            self.timestamp,
            self.name,
            self.level.color().paint(self.level.to_str()),
            self.message
        )
    }
}

/// Where log records go.
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Write records to stderr. The CLI always leaves this on.
    pub console: bool,
    /// Append records to this file. `None` disables file logging.
    pub file: Option<PathBuf>,
    pub min_level: LogLevel,
    /// Colorize the level on the console sink.
    pub use_color: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            console: true,
            file: None,
            min_level: LogLevel::Info,
            use_color: false,
        }
    }
}

impl LoggerConfig {
    /// Map the CLI's log file argument to a sink: an empty string disables it.
    pub fn with_log_file_arg(mut self, log_file: &str) -> Self {
        self.file = if log_file.is_empty() {
            None
        } else {
            Some(PathBuf::from(log_file))
        };
        self
    }

    /// In-memory only, for callers that inspect `entries()` themselves.
    pub fn silent() -> Self {
        Self {
            console: false,
            ..Self::default()
        }
    }
}

#[derive(Debug)]
pub struct Logger {
    name: String,
    config: LoggerConfig,
    file: Option<File>,
    entries: Vec<LogEntry>,
}

impl Logger {
    /// Build a logger, opening the log file in append mode if one is set.
    pub fn new(config: LoggerConfig) -> Result<Self> {
        let file = match &config.file {
            Some(path) => Some(open_log_file(path)?),
            None => None,
        };

        Ok(Self {
            name: LOGGER_NAME.to_string(),
            config,
            file,
            entries: Vec::new(),
        })
    }

    pub fn log(&mut self, level: LogLevel, message: impl Into<String>) {
        if level < self.config.min_level {
            return;
        }

        let entry = LogEntry {
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            name: self.name.clone(),
            level,
            message: message.into(),
        };

        if self.config.console {
            let line = if self.config.use_color {
                entry.format_colored()
            } else {
                entry.format_line()
            };
            let _ = writeln!(io::stderr().lock(), "{}", line);
        }

        if let Some(file) = self.file.as_mut() {
            let _ = writeln!(file, "{}", entry.format_line());
        }

        self.entries.push(entry);
    }

    pub fn debug(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Warning, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    /// Everything logged so far, in order.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn entries_at(&self, level: LogLevel) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().filter(move |e| e.level == level)
    }
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))
}
