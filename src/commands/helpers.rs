//! Command helper utilities

use jobpath::error::{self, Result};
use jobpath::{Resolver, TokenMap};

use crate::cli::JobOptions;

/// Open the job given by `--job` (or `JOBPATH_JOB`)
///
/// `--config` overrides the job's own `config.yml`.
pub fn open_resolver(options: &JobOptions) -> Result<Resolver> {
    let job = options
        .job
        .as_ref()
        .ok_or_else(|| error::config::invalid("No job given; pass --job or set JOBPATH_JOB"))?;

    match &options.config {
        Some(config) => Resolver::open_with_config(job, config),
        None => Resolver::open(job),
    }
}

/// Tokens given with `--token`, later values winning
pub fn token_map(options: &JobOptions) -> TokenMap {
    options.tokens.iter().cloned().collect()
}

/// The `--software` option, required by some commands
pub fn require_software(options: &JobOptions) -> Result<&str> {
    options
        .software
        .as_deref()
        .ok_or_else(|| error::config::invalid("This command needs --software"))
}

/// Template from `--template`, or the launcher profile `--software`/`--profile`
pub fn resolve_template(resolver: &Resolver, options: &JobOptions) -> Result<String> {
    if let Some(template) = &options.template {
        return Ok(template.clone());
    }

    match (&options.software, &options.profile) {
        (Some(software), Some(profile)) => Ok(resolver
            .config()
            .profile_template(software, profile)?
            .to_string()),
        _ => Err(error::config::invalid(
            "No template given; pass --template or --software with --profile",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobpath::JobConfig;
    use jobpath::error::JobpathError;

    fn resolver() -> Resolver {
        let config = JobConfig::from_yaml(
            "software:\n  maya:\n    launcher_profiles:\n      shots: \"<job_path>/<spot>\"\n",
        )
        .unwrap();
        Resolver::new("/jobs/acme", config)
    }

    #[test]
    fn test_template_prefers_explicit() {
        let options = JobOptions {
            template: Some("<job_path>/edit".to_string()),
            software: Some("maya".to_string()),
            profile: Some("shots".to_string()),
            ..Default::default()
        };
        assert_eq!(
            resolve_template(&resolver(), &options).unwrap(),
            "<job_path>/edit"
        );
    }

    #[test]
    fn test_template_from_profile() {
        let options = JobOptions {
            software: Some("maya".to_string()),
            profile: Some("shots".to_string()),
            ..Default::default()
        };
        assert_eq!(
            resolve_template(&resolver(), &options).unwrap(),
            "<job_path>/<spot>"
        );
    }

    #[test]
    fn test_template_unknown_profile() {
        let options = JobOptions {
            software: Some("maya".to_string()),
            profile: Some("assets".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            resolve_template(&resolver(), &options).unwrap_err(),
            JobpathError::ProfileNotFound { .. }
        ));
    }

    #[test]
    fn test_template_missing() {
        let options = JobOptions::default();
        assert!(matches!(
            resolve_template(&resolver(), &options).unwrap_err(),
            JobpathError::ConfigInvalid { .. }
        ));
    }

    #[test]
    fn test_open_resolver_needs_job() {
        assert!(open_resolver(&JobOptions::default()).is_err());
    }

    #[test]
    fn test_token_map_last_wins() {
        let options = JobOptions {
            tokens: vec![
                ("spot".to_string(), "S01".to_string()),
                ("spot".to_string(), "S02".to_string()),
            ],
            ..Default::default()
        };
        assert_eq!(token_map(&options).get("spot").map(String::as_str), Some("S02"));
    }
}
