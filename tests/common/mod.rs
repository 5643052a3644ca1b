#![allow(dead_code)]

use s3_walkthrough::interfaces::StepReporter;
use std::cell::RefCell;

/// A console line, split by the stream it would go to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Out(String),
    Err(String),
}

/// Reporter that keeps every line instead of printing it
#[derive(Default)]
pub struct RecordingReporter {
    lines: RefCell<Vec<Line>>,
    progress: RefCell<Vec<String>>,
}

impl RecordingReporter {
    pub fn lines(&self) -> Vec<Line> {
        self.lines.borrow().clone()
    }

    /// Verbose-only lines, kept apart from the console output
    pub fn progress(&self) -> Vec<String> {
        self.progress.borrow().clone()
    }

    pub fn stdout(&self) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter_map(|l| match l {
                Line::Out(s) => Some(s),
                Line::Err(_) => None,
            })
            .collect()
    }

    pub fn stderr(&self) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter_map(|l| match l {
                Line::Err(s) => Some(s),
                Line::Out(_) => None,
            })
            .collect()
    }
}

impl StepReporter for RecordingReporter {
    fn success(&self, message: &str) {
        self.lines.borrow_mut().push(Line::Out(message.to_string()));
    }

    fn failure(&self, message: &str) {
        self.lines.borrow_mut().push(Line::Err(message.to_string()));
    }

    fn progress(&self, message: &str) {
        self.progress.borrow_mut().push(message.to_string());
    }
}
