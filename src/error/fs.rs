//! File system errors

use super::JobpathError;

/// Creates a file not found error
pub fn not_found(path: impl Into<String>) -> JobpathError {
    JobpathError::FileNotFound { path: path.into() }
}

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> JobpathError {
    JobpathError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a generic IO error with context
pub fn io_error(context: &str, err: &std::io::Error) -> JobpathError {
    JobpathError::IoError {
        message: format!("{context}: {err}"),
    }
}
