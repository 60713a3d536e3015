//! Logger utility for application-wide logging
//!
//! This module provides a logger implementation for the log crate
//! that writes records to a file and can echo them to stderr.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use log::{Log, Record, Level, Metadata, LevelFilter};

/// File-backed logger
pub struct Logger {
    /// File handle for log output
    file: Mutex<Option<File>>,
    /// Whether records are also written to stderr
    echo: bool,
}

impl Logger {
    /// Creates a new logger instance
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file
    ///
    /// # Returns
    ///
    /// A new Logger instance or an error if the file cannot be created
    pub fn new(log_file: &str) -> io::Result<Self> {
        let file = File::create(Path::new(log_file))?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
            echo: false,
        })
    }

    /// Creates a logger that only echoes, without a log file
    pub fn without_file(echo: bool) -> Self {
        Logger {
            file: Mutex::new(None),
            echo,
        }
    }

    /// Opens `log_file`, falling back to a file-less logger with a warning on stderr
    pub fn open_or_fallback(log_file: &str, echo: bool) -> Self {
        match Logger::new(log_file) {
            Ok(logger) => logger.with_echo(echo),
            Err(e) => {
                eprintln!("Warning: cannot open log file {}: {}; file logging disabled", log_file, e);
                Logger::without_file(echo)
            }
        }
    }

    /// Echo every record to stderr as well as the file
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Writes a line to the log file
    pub fn write_line(&self, message: &str) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        if let Some(file) = guard.as_mut() {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Installs a logger writing to `log_file` as the global logger
    ///
    /// An unwritable log file only disables file output.
    pub fn init_global_logger(log_file: &str, echo: bool) {
        let global_logger = Logger::open_or_fallback(log_file, echo);

        if log::set_boxed_logger(Box::new(global_logger)).is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }

        log::set_max_level(LevelFilter::Debug);
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = format!("[{}] {}", record.level(), record.args());
            let _ = self.write_line(&message);

            // stdout carries the result line only
            if self.echo {
                eprintln!("{}", message);
            }
        }
    }

    fn flush(&self) {
        // Already flushing in write_line
    }
}
