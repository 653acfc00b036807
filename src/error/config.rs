//! Configuration errors

use super::JobpathError;

/// Creates a config not found error
pub fn not_found(path: impl Into<String>) -> JobpathError {
    JobpathError::ConfigNotFound { path: path.into() }
}

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> JobpathError {
    JobpathError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a config read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> JobpathError {
    JobpathError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> JobpathError {
    JobpathError::ConfigInvalid {
        message: message.into(),
    }
}

/// Creates a missing launcher profile error
pub fn profile_not_found(software: impl Into<String>, profile: impl Into<String>) -> JobpathError {
    JobpathError::ProfileNotFound {
        software: software.into(),
        profile: profile.into(),
    }
}

/// Creates a missing name profile error
pub fn name_profile_not_found(profile: impl Into<String>) -> JobpathError {
    JobpathError::NameProfileNotFound {
        profile: profile.into(),
    }
}
