//! Version marker errors

use super::JobpathError;

/// Creates an invalid or conflicting version error
pub fn invalid(path: impl Into<String>) -> JobpathError {
    JobpathError::InvalidVersion { path: path.into() }
}
