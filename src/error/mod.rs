//! Error types and handling for jobpath
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`config`]: Job and local configuration errors
//! - [`token`]: Token expansion errors
//! - [`version`]: Version marker errors
//! - [`publish`]: Publish naming errors
//! - [`fs`]: File system errors

pub mod config;
pub mod fs;
pub mod publish;
pub mod token;
pub mod version;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for jobpath operations
#[derive(Error, Diagnostic, Debug)]
pub enum JobpathError {
    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(
        code(jobpath::config::not_found),
        help("Every job root needs a config.yml, or pass --config explicitly")
    )]
    ConfigNotFound { path: String },

    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(jobpath::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(jobpath::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(jobpath::config::invalid))]
    ConfigInvalid { message: String },

    #[error("Launcher profile '{profile}' is not configured for '{software}'")]
    #[diagnostic(
        code(jobpath::config::profile_not_found),
        help("Add it under software.{software}.launcher_profiles in config.yml")
    )]
    ProfileNotFound { software: String, profile: String },

    #[error("Name profile '{profile}' is not configured")]
    #[diagnostic(
        code(jobpath::config::name_profile_not_found),
        help("Add it under globals.name_profiles or software.<name>.name_profiles")
    )]
    NameProfileNotFound { profile: String },

    #[error("No template_directory is configured for this job")]
    #[diagnostic(code(jobpath::config::template_directory_missing))]
    TemplateDirectoryMissing,

    // Token errors
    #[error("Token '{token}' expands into itself while resolving: {template}")]
    #[diagnostic(
        code(jobpath::token::cycle),
        help("Check the global tokens for values that reference each other")
    )]
    TokenCycle { token: String, template: String },

    #[error("Token expansion did not settle after {depth} passes: {template}")]
    #[diagnostic(code(jobpath::token::recursion_limit))]
    TokenRecursionLimit { template: String, depth: usize },

    #[error("Missing values for tokens: {tokens}")]
    #[diagnostic(
        code(jobpath::token::unresolved),
        help("Pick a value for every token before creating folders")
    )]
    UnresolvedTokens { tokens: String },

    // Version errors
    #[error("There are conflicting version numbers in this path or none at all: {path}")]
    #[diagnostic(
        code(jobpath::version::invalid),
        help("File names need exactly one version number, written as _v### (e.g. shot_v003.ma)")
    )]
    InvalidVersion { path: String },

    // Publish errors
    #[error("Cannot derive a publish name from '{name}': found {count} version markers")]
    #[diagnostic(
        code(jobpath::publish::ambiguous),
        help("Rename the file so it carries at most one _v### marker")
    )]
    AmbiguousPublishName { name: String, count: usize },

    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(code(jobpath::fs::not_found))]
    FileNotFound { path: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(jobpath::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(jobpath::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for JobpathError {
    fn from(err: std::io::Error) -> Self {
        JobpathError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for JobpathError {
    fn from(err: serde_yaml::Error) -> Self {
        JobpathError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for JobpathError {
    fn from(err: serde_json::Error) -> Self {
        JobpathError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, JobpathError>;
