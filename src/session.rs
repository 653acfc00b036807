//! Recent selections per software
//!
//! A launcher remembers the last jobs folder, job, profile and token values
//! picked for each software in a per-user YAML file. The selection is passed
//! around as an explicit [`SessionContext`] and turned into a token map when
//! resolving paths.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{self, Result};
use crate::token::TokenMap;

/// Default file name of the per-user recents file in the home directory
pub const LOCAL_CONFIG_FILE_NAME: &str = "pipeline_local_config.yml";

/// Environment variable overriding the recents file location
pub const LOCAL_CONFIG_ENV: &str = "JOBPATH_LOCAL_CONFIG";

/// One picked token value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionToken {
    pub name: String,
    pub value: String,
}

/// The selection a launcher was last used with
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    /// Folder containing the jobs
    #[serde(default)]
    pub jobs_dir: String,

    /// Job folder name inside `jobs_dir`
    #[serde(default)]
    pub job: String,

    /// Launcher profile
    #[serde(default)]
    pub profile: String,

    /// Token values in the order they were picked
    #[serde(default)]
    pub tokens: Vec<SessionToken>,
}

impl SessionContext {
    /// Root of the selected job
    pub fn job_path(&self) -> PathBuf {
        Path::new(&self.jobs_dir).join(&self.job)
    }

    /// Set a token, keeping its original position when already present
    pub fn set_token(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.tokens.iter_mut().find(|t| t.name == name) {
            Some(existing) => existing.value = value,
            None => self.tokens.push(SessionToken { name, value }),
        }
    }

    /// Token values as a map for resolution
    pub fn token_map(&self) -> TokenMap {
        self.tokens
            .iter()
            .map(|t| (t.name.clone(), t.value.clone()))
            .collect()
    }
}

/// Per-user file of recent selections, keyed by software
#[derive(Debug, Clone)]
pub struct RecentStore {
    path: PathBuf,
}

impl RecentStore {
    /// Use a specific recents file
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Use `$JOBPATH_LOCAL_CONFIG`, or `~/pipeline_local_config.yml`
    pub fn open_default() -> Result<Self> {
        if let Ok(path) = std::env::var(LOCAL_CONFIG_ENV) {
            return Ok(Self::open(path));
        }

        let home = dirs::home_dir().ok_or_else(|| {
            error::config::invalid("Could not determine the home directory for recents")
        })?;
        Ok(Self::open(home.join(LOCAL_CONFIG_FILE_NAME)))
    }

    /// Location of the recents file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every software's recents; a missing file is empty
    fn read_all(&self) -> Result<BTreeMap<String, SessionContext>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let display = self.path.display().to_string();
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| error::config::read_failed(&display, e.to_string()))?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        let all: Option<BTreeMap<String, SessionContext>> = serde_yaml::from_str(&content)
            .map_err(|e| error::config::parse_failed(display, e.to_string()))?;
        Ok(all.unwrap_or_default())
    }

    /// Recent selection for a software
    pub fn load(&self, software: &str) -> Result<Option<SessionContext>> {
        Ok(self.read_all()?.remove(software))
    }

    /// Store the selection for a software, leaving other entries intact
    pub fn save(&self, software: &str, context: &SessionContext) -> Result<()> {
        if software.is_empty() {
            return Err(error::config::invalid("Recents need a software name"));
        }

        let display = self.path.display().to_string();
        let mut all = self.read_all()?;
        all.insert(software.to_string(), context.clone());
        let yaml = serde_yaml::to_string(&all)
            .map_err(|e| error::fs::write_failed(&display, e.to_string()))?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&dir)
            .map_err(|e| error::fs::write_failed(&display, e.to_string()))?;

        let mut staged = tempfile::NamedTempFile::new_in(&dir)
            .map_err(|e| error::fs::write_failed(&display, e.to_string()))?;
        staged
            .write_all(yaml.as_bytes())
            .map_err(|e| error::fs::write_failed(&display, e.to_string()))?;
        staged
            .persist(&self.path)
            .map_err(|e| error::fs::write_failed(&display, e.error.to_string()))?;

        tracing::debug!("Saved recents for '{}' to {}", software, self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::JobpathError;
    use tempfile::TempDir;

    fn context() -> SessionContext {
        let mut context = SessionContext {
            jobs_dir: "/jobs".to_string(),
            job: "acme".to_string(),
            profile: "shots".to_string(),
            tokens: Vec::new(),
        };
        context.set_token("spot", "S01");
        context.set_token("shot", "sh010");
        context
    }

    #[test]
    fn test_set_token_keeps_order() {
        let mut context = context();
        context.set_token("spot", "S02");
        let names: Vec<_> = context.tokens.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["spot", "shot"]);
        assert_eq!(context.token_map().get("spot").map(String::as_str), Some("S02"));
    }

    #[test]
    fn test_job_path() {
        assert_eq!(context().job_path(), Path::new("/jobs").join("acme"));
    }

    #[test]
    fn test_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let store = RecentStore::open(temp.path().join("recents.yml"));
        assert_eq!(store.load("maya").unwrap(), None);
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let store = RecentStore::open(temp.path().join("recents.yml"));

        store.save("maya", &context()).unwrap();
        let mut nuke = context();
        nuke.profile = "comps".to_string();
        store.save("nuke", &nuke).unwrap();

        assert_eq!(store.load("maya").unwrap(), Some(context()));
        assert_eq!(store.load("nuke").unwrap(), Some(nuke));
        assert_eq!(store.load("houdini").unwrap(), None);
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let store = RecentStore::open(temp.path().join("nested/dir/recents.yml"));
        store.save("maya", &context()).unwrap();
        assert!(store.path().is_file());
    }

    #[test]
    fn test_save_requires_software() {
        let temp = TempDir::new().unwrap();
        let store = RecentStore::open(temp.path().join("recents.yml"));
        assert!(matches!(
            store.save("", &context()).unwrap_err(),
            JobpathError::ConfigInvalid { .. }
        ));
    }

    #[test]
    fn test_malformed_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("recents.yml");
        std::fs::write(&path, "maya: [unclosed").unwrap();

        let store = RecentStore::open(&path);
        assert!(matches!(
            store.load("maya").unwrap_err(),
            JobpathError::ConfigParseFailed { .. }
        ));
    }

    #[test]
    fn test_partial_entry_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("recents.yml");
        std::fs::write(&path, "maya:\n  job: acme\n").unwrap();

        let loaded = RecentStore::open(&path).load("maya").unwrap().unwrap();
        assert_eq!(loaded.job, "acme");
        assert!(loaded.tokens.is_empty());
    }
}
