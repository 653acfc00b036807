//! Configuration file handling for jobpath
//!
//! This module contains data structures for:
//! - `config.yml` - Job configuration at the root of every job
//! - `globals` - Global tokens and name profiles inside the job configuration

pub mod globals;
pub mod job;

use std::path::{Path, PathBuf};

// Re-export commonly used types
pub use globals::Globals;
pub use job::{JobConfig, SoftwareConfig};

/// File name of the job configuration at a job root
pub const CONFIG_FILE_NAME: &str = "config.yml";

/// Default location of the job configuration for a job root
pub fn config_path_for(job_path: &Path) -> PathBuf {
    job_path.join(CONFIG_FILE_NAME)
}
