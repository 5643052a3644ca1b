use std::path::PathBuf;
use thiserror::Error;

/// Failures raised by an [`crate::interfaces::ObjectStore`] implementation.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("{operation} failed{}: {message}", code_suffix(.code))]
    Service {
        operation: &'static str,
        code: Option<String>,
        message: String,
    },

    #[error("Failed to read response body for '{key}': {message}")]
    Body { key: String, message: String },

    #[error("Runtime error: {0}")]
    Runtime(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

fn code_suffix(code: &Option<String>) -> String {
    code.as_deref().map(|c| format!(" ({c})")).unwrap_or_default()
}

impl StorageError {
    /// Build a service error with no SDK error code attached.
    pub fn service(operation: &'static str, message: impl Into<String>) -> Self {
        StorageError::Service {
            operation,
            code: None,
            message: message.into(),
        }
    }
}

/// Failure of a single walkthrough step.
#[derive(Debug, Error)]
pub enum WalkthroughError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl WalkthroughError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        WalkthroughError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, StorageError>;
