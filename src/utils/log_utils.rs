//! Logging utilities for the application

use std::io::Write;
use tracing_subscriber::EnvFilter;

/// Log levels for controlling verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Normal execution, no verbose flag
    Normal = 0,
    /// Info level, one verbose flag (-v)
    Info = 1,
    /// Debug level, two verbose flags (-v -v)
    Debug = 2,
}

/// Logger for console messages
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    /// Current verbosity level
    verbosity: u8,
}

impl Logger {
    /// Create a new logger with the specified verbosity
    #[must_use]
    pub fn new(verbosity: u8) -> Self {
        Self { verbosity }
    }

    /// Write `msg` to `out` if the current verbosity is at least `level`.
    /// Write errors are ignored.
    pub fn log_to<W: Write>(&self, out: &mut W, msg: &str, level: LogLevel) {
        if self.verbosity >= level as u8 {
            let _ = match level {
                LogLevel::Normal => writeln!(out, "{msg}"),
                LogLevel::Info => writeln!(out, "info: {msg}"),
                LogLevel::Debug => writeln!(out, "dbg: {msg}"),
            };
        }
    }

    /// Default `tracing` directive for this verbosity
    #[must_use]
    pub fn tracing_directive(&self) -> &'static str {
        match self.verbosity {
            0 => "s3_walkthrough=warn",
            1 => "s3_walkthrough=info",
            2 => "s3_walkthrough=debug",
            _ => "s3_walkthrough=debug,aws_sdk_s3=debug,aws_smithy_runtime=debug",
        }
    }
}

/// Install the global `tracing` subscriber. `RUST_LOG` overrides the verbosity default.
pub fn init_tracing(logger: &Logger) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logger.tracing_directive()));

    // A subscriber may already be installed (e.g. by a test harness)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_grows_with_verbosity() {
        assert_eq!(Logger::new(0).tracing_directive(), "s3_walkthrough=warn");
        assert_eq!(Logger::new(1).tracing_directive(), "s3_walkthrough=info");
        assert_eq!(Logger::new(2).tracing_directive(), "s3_walkthrough=debug");
        assert!(Logger::new(5).tracing_directive().contains("aws_sdk_s3=debug"));
    }

    #[test]
    fn info_lines_need_one_verbose_flag() {
        let mut quiet = Vec::new();
        Logger::new(0).log_to(&mut quiet, "Starting step upload-file", LogLevel::Info);
        assert!(quiet.is_empty());

        let mut verbose = Vec::new();
        Logger::new(1).log_to(&mut verbose, "Starting step upload-file", LogLevel::Info);
        assert_eq!(verbose, b"info: Starting step upload-file\n");
    }

    #[test]
    fn levels_are_ordered() {
        assert!(LogLevel::Normal < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Debug);
    }
}
