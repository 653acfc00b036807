//! Job configuration (config.yml) data structures
//!
//! The configuration is read once per job root and treated as read-only.
//! Missing sections are normal: lookups degrade to empty results and log a
//! warning instead of failing.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::globals::{Globals, null_as_default};
use crate::error::{self, Result};
use crate::token::TokenMap;

/// Job configuration from config.yml
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct JobConfig {
    /// Global tokens and name profiles
    #[serde(default, deserialize_with = "null_as_default")]
    pub globals: Globals,

    /// Per-software settings, keyed by software name (e.g. "maya", "nuke")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub software: Option<BTreeMap<String, Option<SoftwareConfig>>>,

    /// Folder names hidden when listing the values of a token
    #[serde(default, deserialize_with = "null_as_default")]
    pub exclude: BTreeMap<String, Vec<String>>,

    /// Path template of the folder holding boilerplate project files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_directory: Option<String>,
}

/// Settings for one software package
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SoftwareConfig {
    /// Profile name to path template
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launcher_profiles: Option<BTreeMap<String, String>>,

    /// Project file extensions, with the leading dot (e.g. ".ma")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Vec<String>>,

    /// Path template of the software's hook scripts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hooks: Option<String>,

    /// Name templates overriding the global ones for this software
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_profiles: Option<BTreeMap<String, String>>,
}

impl JobConfig {
    /// Parse job configuration from YAML string
    ///
    /// An empty or `null` document is an empty configuration.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Option<Self> = serde_yaml::from_str(yaml)?;
        Ok(config.unwrap_or_default())
    }

    /// Load job configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let display = path.display().to_string();
        if !path.is_file() {
            return Err(error::config::not_found(display));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| error::config::read_failed(&display, e.to_string()))?;

        Self::from_yaml(&content).map_err(|e| match e {
            error::JobpathError::ConfigParseFailed { reason, .. } => {
                error::config::parse_failed(display, reason)
            }
            other => other,
        })
    }

    /// Serialize job configuration to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Check whether the software has an entry in the configuration
    pub fn supports_software(&self, software: &str) -> bool {
        self.software
            .as_ref()
            .is_some_and(|all| all.contains_key(software))
    }

    /// Get the settings for a software, warning when it is not configured
    pub fn software(&self, software: &str) -> Option<&SoftwareConfig> {
        let found = self
            .software
            .as_ref()
            .and_then(|all| all.get(software))
            .and_then(Option::as_ref);
        if found.is_none() {
            tracing::warn!("Software '{}' is not supported in this job config", software);
        }
        found
    }

    /// Launcher profiles for a software (empty if not configured)
    pub fn launcher_profiles(&self, software: &str) -> BTreeMap<String, String> {
        let Some(config) = self.software(software) else {
            return BTreeMap::new();
        };
        config.launcher_profiles.clone().unwrap_or_else(|| {
            tracing::warn!("launcher_profiles not found for '{}' in job config", software);
            BTreeMap::new()
        })
    }

    /// Path template of a launcher profile
    pub fn profile_template(&self, software: &str, profile: &str) -> Result<&str> {
        self.software(software)
            .and_then(|config| config.launcher_profiles.as_ref())
            .and_then(|profiles| profiles.get(profile))
            .map(String::as_str)
            .ok_or_else(|| error::config::profile_not_found(software, profile))
    }

    /// Project file extensions for a software (empty if not configured)
    pub fn extensions(&self, software: &str) -> &[String] {
        match self.software(software).map(|c| c.extensions.as_deref()) {
            Some(Some(extensions)) => extensions,
            Some(None) => {
                tracing::warn!("No extensions found for '{}' in job config", software);
                &[]
            }
            None => &[],
        }
    }

    /// Hook path template for a software
    pub fn hooks(&self, software: &str) -> Option<&str> {
        self.software(software)
            .and_then(|config| config.hooks.as_deref())
    }

    /// Name template for a profile
    ///
    /// A software-specific entry overrides the global one.
    pub fn name_profile(&self, profile: &str, software: Option<&str>) -> Option<&str> {
        let global = self.globals.name_profiles.get(profile).map(String::as_str);
        let specific = software
            .and_then(|name| self.software(name))
            .and_then(|config| config.name_profiles.as_ref())
            .and_then(|profiles| profiles.get(profile))
            .map(String::as_str);
        specific.or(global)
    }

    /// Global token defaults
    pub fn global_tokens(&self) -> TokenMap {
        self.globals.tokens()
    }

    /// Excluded folder names for a token (empty if none)
    pub fn excludes(&self, token: &str) -> &[String] {
        self.exclude.get(token).map_or(&[], Vec::as_slice)
    }

    /// Raw template_directory template
    pub fn template_directory(&self) -> Option<&str> {
        self.template_directory.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::JobpathError;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"
globals:
  company: acme
  name_profiles:
    shot: "<spot>_<shot>_<ver>"
software:
  maya:
    launcher_profiles:
      shots: "<job_path>/<spot>/<shot>/3d/maya"
      assets: "<job_path>/assets/<asset>/maya"
    extensions: [".ma", ".mb"]
    hooks: "<job_path>/pipeline/hooks/maya"
    name_profiles:
      shot: "<shot>_maya_<ver>"
  nuke:
    extensions: [".nk"]
  houdini:
exclude:
  spot: ["_template", "old"]
template_directory: "<job_path>/pipeline/templates"
"#;

    fn sample() -> JobConfig {
        JobConfig::from_yaml(SAMPLE).unwrap()
    }

    #[test]
    fn test_parse_sample() {
        let config = sample();
        assert!(config.supports_software("maya"));
        assert!(config.supports_software("houdini"));
        assert!(!config.supports_software("max"));
        assert_eq!(
            config.template_directory(),
            Some("<job_path>/pipeline/templates")
        );
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(JobConfig::from_yaml("").unwrap(), JobConfig::default());
        assert_eq!(JobConfig::from_yaml("~").unwrap(), JobConfig::default());
    }

    #[test]
    fn test_launcher_profiles() {
        let config = sample();
        let profiles = config.launcher_profiles("maya");
        assert_eq!(profiles.len(), 2);
        assert!(profiles.contains_key("shots"));
        assert!(config.launcher_profiles("nuke").is_empty());
        assert!(config.launcher_profiles("houdini").is_empty());
        assert!(config.launcher_profiles("max").is_empty());
    }

    #[test]
    fn test_profile_template() {
        let config = sample();
        assert_eq!(
            config.profile_template("maya", "shots").unwrap(),
            "<job_path>/<spot>/<shot>/3d/maya"
        );
        let err = config.profile_template("maya", "comps").unwrap_err();
        assert!(matches!(err, JobpathError::ProfileNotFound { .. }));
    }

    #[test]
    fn test_extensions() {
        let config = sample();
        assert_eq!(config.extensions("maya"), [".ma", ".mb"]);
        assert_eq!(config.extensions("nuke"), [".nk"]);
        assert!(config.extensions("houdini").is_empty());
        assert!(config.extensions("max").is_empty());
    }

    #[test]
    fn test_hooks() {
        let config = sample();
        assert_eq!(config.hooks("maya"), Some("<job_path>/pipeline/hooks/maya"));
        assert_eq!(config.hooks("nuke"), None);
    }

    #[test]
    fn test_name_profile_override() {
        let config = sample();
        assert_eq!(
            config.name_profile("shot", None),
            Some("<spot>_<shot>_<ver>")
        );
        assert_eq!(
            config.name_profile("shot", Some("maya")),
            Some("<shot>_maya_<ver>")
        );
        assert_eq!(
            config.name_profile("shot", Some("nuke")),
            Some("<spot>_<shot>_<ver>")
        );
        assert_eq!(config.name_profile("asset", Some("maya")), None);
    }

    #[test]
    fn test_excludes() {
        let config = sample();
        assert_eq!(config.excludes("spot"), ["_template", "old"]);
        assert!(config.excludes("shot").is_empty());
    }

    #[test]
    fn test_missing_sections_degrade() {
        let config = JobConfig::from_yaml("globals:\n  company: acme\n").unwrap();
        assert!(!config.supports_software("maya"));
        assert!(config.launcher_profiles("maya").is_empty());
        assert!(config.excludes("spot").is_empty());
        assert_eq!(config.template_directory(), None);
        assert_eq!(
            config.global_tokens().get("company").map(String::as_str),
            Some("acme")
        );
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = JobConfig::load(&temp.path().join("config.yml")).unwrap_err();
        assert!(matches!(err, JobpathError::ConfigNotFound { .. }));
    }

    #[test]
    fn test_load_reports_path_on_parse_failure() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        std::fs::write(&path, "software: [unclosed").unwrap();

        let err = JobConfig::load(&path).unwrap_err();
        match err {
            JobpathError::ConfigParseFailed { path: reported, .. } => {
                assert!(reported.ends_with("config.yml"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = sample();
        let yaml = config.to_yaml().unwrap();
        assert_eq!(JobConfig::from_yaml(&yaml).unwrap(), config);
    }
}
