//! Common test utilities for jobpath integration tests

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Configuration of the standard test job
pub const JOB_CONFIG: &str = r#"
globals:
  company: acme
  year: 2018
  name_profiles:
    shot: "<shot>_<step>_<ver>"
software:
  maya:
    extensions: [".ma", ".mb"]
    launcher_profiles:
      shots: "<job_path>/<spot>/<shot>/3d/<step>"
      assets: "<job_path>/assets/<asset>"
    hooks: "<job_path>/pipeline/hooks/maya"
  nuke:
    extensions: [".nk"]
    launcher_profiles:
      comps: "<job_path>/<spot>/<shot>/comp"
    name_profiles:
      shot: "<shot>_comp_<ver>"
exclude:
  spot: [pipeline, assets]
  shot: [_old]
template_directory: "<job_path>/pipeline/templates"
"#;

/// A job folder inside a temporary jobs folder
#[allow(dead_code)]
pub struct TestJob {
    /// Temporary jobs folder
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the job root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestJob {
    /// Create an empty job named `acme` with the given config
    pub fn with_config(config: &str) -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().join("acme");
        std::fs::create_dir_all(&path).expect("Failed to create job directory");
        std::fs::write(path.join("config.yml"), config).expect("Failed to write config");
        Self { temp, path }
    }

    /// Create the standard job: two spots, a few shots and a Maya boilerplate
    pub fn new() -> Self {
        let job = Self::with_config(JOB_CONFIG);
        for dir in [
            "S01/sh010",
            "S01/sh020",
            "S01/_old",
            "S01/.[shot]/3d/anim",
            "S01/.[shot]/3d/light",
            "S02",
            "assets",
        ] {
            job.create_dir(dir);
        }
        job.write_file("pipeline/templates/maya.ma", "//Maya ASCII 2018 scene");
        job
    }

    /// Folder holding the job
    pub fn jobs_dir(&self) -> &Path {
        self.temp.path()
    }

    /// Create a directory inside the job
    pub fn create_dir(&self, path: &str) -> PathBuf {
        let dir = self.path.join(path);
        std::fs::create_dir_all(&dir).expect("Failed to create directory");
        dir
    }

    /// Write a file inside the job
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the job
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a path exists in the job
    pub fn exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Job root as a string, the way the resolver binds it
    pub fn root(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }

    /// Expected resolved path for segments below the job root
    pub fn expected(&self, relative: &str) -> String {
        let mut path = self.path.clone();
        for segment in relative.split('/').filter(|s| !s.is_empty()) {
            path.push(segment);
        }
        path.to_string_lossy().into_owned()
    }
}
