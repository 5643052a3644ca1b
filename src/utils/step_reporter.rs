use crate::interfaces::StepReporter;
use crate::utils::log_utils::{LogLevel, Logger};
use std::cell::RefCell;
use std::io::{self, Stderr, Stdout, Write};

/// Console implementation that proxies through the shared [`Logger`].
///
/// Successes go to stdout, failures to stderr. Progress lines go to stdout
/// and only show with `-v`.
pub struct ConsoleReporter<O: Write = Stdout, E: Write = Stderr> {
    logger: Logger,
    out: RefCell<O>,
    err: RefCell<E>,
}

impl ConsoleReporter {
    #[must_use]
    pub fn new(logger: &Logger) -> Self {
        Self::with_writers(logger, io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> ConsoleReporter<O, E> {
    pub fn with_writers(logger: &Logger, out: O, err: E) -> Self {
        Self {
            logger: *logger,
            out: RefCell::new(out),
            err: RefCell::new(err),
        }
    }

    /// Give back the stdout and stderr writers
    pub fn into_writers(self) -> (O, E) {
        (self.out.into_inner(), self.err.into_inner())
    }
}

impl<O: Write, E: Write> StepReporter for ConsoleReporter<O, E> {
    fn success(&self, message: &str) {
        self.logger
            .log_to(&mut *self.out.borrow_mut(), message, LogLevel::Normal);
    }

    fn failure(&self, message: &str) {
        // failures ignore verbosity
        let _ = writeln!(self.err.borrow_mut(), "{message}");
    }

    fn progress(&self, message: &str) {
        self.logger
            .log_to(&mut *self.out.borrow_mut(), message, LogLevel::Info);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(bytes: Vec<u8>) -> String {
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn successes_go_to_stdout_and_failures_to_stderr() {
        let reporter = ConsoleReporter::with_writers(&Logger::new(0), Vec::new(), Vec::new());
        reporter.success("Bucket created: nome-do-bucket");
        reporter.failure("Failed to delete object: DeleteObject failed (NoSuchKey): gone");
        reporter.success("Buckets:");

        let (out, err) = reporter.into_writers();
        assert_eq!(text(out), "Bucket created: nome-do-bucket\nBuckets:\n");
        assert_eq!(
            text(err),
            "Failed to delete object: DeleteObject failed (NoSuchKey): gone\n"
        );
    }

    #[test]
    fn progress_is_hidden_without_verbose() {
        let reporter = ConsoleReporter::with_writers(&Logger::new(0), Vec::new(), Vec::new());
        reporter.progress("Starting step create-bucket");
        let (out, err) = reporter.into_writers();
        assert!(out.is_empty());
        assert!(err.is_empty());

        let reporter = ConsoleReporter::with_writers(&Logger::new(1), Vec::new(), Vec::new());
        reporter.progress("Starting step create-bucket");
        let (out, _) = reporter.into_writers();
        assert_eq!(text(out), "info: Starting step create-bucket\n");
    }
}
