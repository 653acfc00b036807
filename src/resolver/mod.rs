//! Path resolution for a job
//!
//! This module handles:
//! - Binding a job root to its configuration snapshot
//! - Merging global token defaults with caller-supplied tokens
//! - Building normalized paths from templates, optionally stopping at a token
//! - Reporting which tokens a template still needs
//!
//! Name building lives in [`name`].

pub mod name;

use std::path::{Path, PathBuf};

use crate::config::{self, JobConfig};
use crate::error::{self, Result};
use crate::token::{self, TokenMap};

/// Token always bound to the job root
pub const JOB_PATH_TOKEN: &str = "job_path";

/// Resolves templates against one job's configuration.
///
/// The configuration is a read-only snapshot; [`Resolver::reload`] swaps in a
/// fresh one.
#[derive(Debug, Clone)]
pub struct Resolver {
    job_path: String,
    config_path: Option<PathBuf>,
    config: JobConfig,
}

impl Resolver {
    /// Create a resolver from an already decoded configuration
    pub fn new(job_path: impl Into<String>, config: JobConfig) -> Self {
        Self {
            job_path: job_path.into(),
            config_path: None,
            config,
        }
    }

    /// Open a job by reading `config.yml` at its root
    pub fn open(job_path: impl AsRef<Path>) -> Result<Self> {
        let job_path = job_path.as_ref();
        Self::open_with_config(job_path, config::config_path_for(job_path))
    }

    /// Open a job with an explicit configuration file
    pub fn open_with_config(
        job_path: impl AsRef<Path>,
        config_path: impl Into<PathBuf>,
    ) -> Result<Self> {
        let config_path = config_path.into();
        let config = JobConfig::load(&config_path)?;
        tracing::debug!("Loaded job config from {}", config_path.display());

        Ok(Self {
            job_path: job_path.as_ref().to_string_lossy().into_owned(),
            config_path: Some(config_path),
            config,
        })
    }

    /// Re-read the configuration file, replacing the current snapshot
    pub fn reload(&mut self) -> Result<()> {
        let Some(path) = &self.config_path else {
            return Err(error::config::invalid(
                "configuration was not loaded from a file and cannot be reloaded",
            ));
        };
        self.config = JobConfig::load(path)?;
        Ok(())
    }

    /// The bound job root
    pub fn job_path(&self) -> &str {
        &self.job_path
    }

    /// The configuration snapshot
    pub fn config(&self) -> &JobConfig {
        &self.config
    }

    /// Where the configuration was loaded from, if it came from a file
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Global tokens, minus any attempt to redefine the job root
    fn global_tokens(&self) -> TokenMap {
        let mut globals = self.config.global_tokens();
        if globals.remove(JOB_PATH_TOKEN).is_some() {
            tracing::warn!("Ignoring global '{}'; the job root is fixed", JOB_PATH_TOKEN);
        }
        globals
    }

    /// Globals that pre-expand a template
    ///
    /// Globals the caller overrides with a non-empty value are held back so
    /// the caller's value lands in their placeholders, and so is `keep` so a
    /// stop marker survives until truncation.
    fn template_globals(&self, tokens: &TokenMap, keep: Option<&str>) -> TokenMap {
        let mut globals = self.global_tokens();
        globals.retain(|name, _| {
            token::lookup(tokens, name).is_none() && keep != Some(name.as_str())
        });
        globals
    }

    /// Caller tokens laid over the global defaults, plus the job root
    pub fn merged_tokens(&self, tokens: &TokenMap) -> TokenMap {
        let mut merged = overlay(self.global_tokens(), tokens);
        merged.insert(JOB_PATH_TOKEN.to_string(), self.job_path.clone());
        merged
    }

    /// Build a path from a template
    ///
    /// With a `stop_token`, the template is cut at the first `<stop_token>`
    /// so the result is the folder that holds that token's values.
    ///
    /// No existence check is done here.
    pub fn get_path(
        &self,
        template: &str,
        tokens: &TokenMap,
        stop_token: Option<&str>,
    ) -> Result<String> {
        let mut template = token::expand(template, &self.template_globals(tokens, stop_token))?;

        if let Some(stop) = stop_token {
            let marker = format!("<{stop}>");
            match template.find(&marker) {
                Some(index) => template.truncate(index),
                None => tracing::warn!(
                    "Stop token '{}' not found in template '{}'; using the full template",
                    stop,
                    template
                ),
            }
        }

        let path = token::replace_tokens(&template, &self.merged_tokens(tokens))?;
        tracing::debug!("Resolved '{}' to '{}'", template, path);
        Ok(path)
    }

    /// Tokens a template needs from the caller, in order
    ///
    /// Globals are expanded first, so tokens only reachable through a global
    /// value are reported, and fully resolved ones are not. `job_path` is
    /// never reported.
    pub fn get_tokens(&self, template: &str) -> Result<Vec<String>> {
        self.tokens_for(template, &TokenMap::new())
    }

    /// Tokens of the template once the caller's values are taken into account
    ///
    /// A global the caller overrides stays a placeholder, so it is reported
    /// like any other caller token.
    pub(crate) fn tokens_for(&self, template: &str, tokens: &TokenMap) -> Result<Vec<String>> {
        let expanded = token::expand(template, &self.template_globals(tokens, None))?;
        Ok(token::find_tokens(&expanded)
            .into_iter()
            .filter(|name| name != JOB_PATH_TOKEN)
            .collect())
    }

    /// Tokens of the template that have no value yet, without duplicates
    pub fn unresolved_tokens(&self, template: &str, tokens: &TokenMap) -> Result<Vec<String>> {
        let merged = self.merged_tokens(tokens);
        let mut missing: Vec<String> = Vec::new();
        for name in self.tokens_for(template, tokens)? {
            if token::lookup(&merged, &name).is_none() && !missing.contains(&name) {
                missing.push(name);
            }
        }
        Ok(missing)
    }

    /// Folder names hidden when listing a token's values
    pub fn get_excludes(&self, token: &str) -> &[String] {
        self.config.excludes(token)
    }

    /// Resolved folder holding boilerplate project files
    pub fn template_directory(&self) -> Result<String> {
        let template = self
            .config
            .template_directory()
            .ok_or(error::JobpathError::TemplateDirectoryMissing)?;
        self.get_path(template, &TokenMap::new(), None)
    }

    /// Resolved hook folder of a software, if one is configured
    pub fn hooks_path(&self, software: &str) -> Result<Option<String>> {
        self.config
            .hooks(software)
            .map(|template| self.get_path(template, &TokenMap::new(), None))
            .transpose()
    }
}

/// Lay `tokens` over `defaults`.
///
/// An empty caller value is "no opinion" and keeps a non-empty default.
fn overlay(mut defaults: TokenMap, tokens: &TokenMap) -> TokenMap {
    for (name, value) in tokens {
        if value.is_empty() && token::lookup(&defaults, name).is_some() {
            continue;
        }
        defaults.insert(name.clone(), value.clone());
    }
    defaults
}
