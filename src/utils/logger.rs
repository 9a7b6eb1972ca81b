//! Logger utility for application-wide logging
//!
//! This module provides a logger that works alongside the standard log
//! crate: records are filtered and printed to stderr by env_logger and can
//! be mirrored into a log file.

use std::fs::OpenOptions;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};
use log::{Log, Record, Level, Metadata, LevelFilter};

/// Custom logger implementation
pub struct Logger {
    /// File handle for log output, shared with loggers created by `share`
    file: Arc<Mutex<Option<File>>>,
    /// Console output with `RUST_LOG` filtering, when installed globally
    console: Option<env_logger::Logger>,
}

impl Logger {
    /// Creates a new logger instance
    ///
    /// # Arguments
    ///
    /// * `log_file` - Optional path to the log file; records are appended
    ///
    /// # Returns
    ///
    /// A new Logger instance or an error if the file cannot be opened
    pub fn new(log_file: Option<&str>) -> io::Result<Self> {
        let file = match log_file {
            Some(path) => Some(OpenOptions::new().create(true).append(true).open(Path::new(path))?),
            None => None,
        };
        Ok(Logger {
            file: Arc::new(Mutex::new(file)),
            console: None,
        })
    }

    /// A logger writing through the same file handle, without console output
    pub fn share(&self) -> Logger {
        Logger {
            file: Arc::clone(&self.file),
            console: None,
        }
    }

    /// Logs a message to the log file, if one is open
    ///
    /// # Arguments
    ///
    /// * `message` - The message to log
    pub fn log(&self, message: &str) -> io::Result<()> {
        if let Ok(mut guard) = self.file.lock() {
            if let Some(file) = guard.as_mut() {
                writeln!(file, "{}", message)?;
                file.flush()?;
            }
        }
        Ok(())
    }

    /// Whether messages are being written to a file
    pub fn has_file(&self) -> bool {
        self.file.lock().map(|guard| guard.is_some()).unwrap_or(false)
    }

    /// Static method to initialize the global logger
    ///
    /// `RUST_LOG` overrides `level`. Records are also appended to `log_file`
    /// when given.
    ///
    /// # Returns
    ///
    /// A logger for command output that shares the global logger's file
    /// handle, so both write to `log_file` in order
    pub fn init_global_logger(log_file: Option<&str>, level: LevelFilter) -> io::Result<Logger> {
        let console = env_logger::Builder::new()
            .filter_level(level)
            .parse_env(env_logger::Env::default())
            .format_timestamp(None)
            .build();
        let max_level = console.filter();

        let mut global_logger = Logger::new(log_file)?;
        let command_logger = global_logger.share();
        global_logger.console = Some(console);

        if log::set_boxed_logger(Box::new(global_logger)).is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }

        log::set_max_level(max_level);
        Ok(command_logger)
    }
}

// Implement the Log trait to make our Logger work with the log crate
impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        match &self.console {
            Some(console) => console.enabled(metadata),
            None => metadata.level() <= Level::Debug,
        }
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = format!("[{}] {}", record.level(), record.args());
            let _ = self.log(&message);

            if let Some(console) = &self.console {
                console.log(record);
            }
        }
    }

    fn flush(&self) {
        if let Some(console) = &self.console {
            console.flush();
        }
    }
}
