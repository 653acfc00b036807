//! Publish naming errors

use super::JobpathError;

/// Creates an ambiguous publish name error
pub fn ambiguous(name: impl Into<String>, count: usize) -> JobpathError {
    JobpathError::AmbiguousPublishName {
        name: name.into(),
        count,
    }
}
