//! Artifact names from name profiles

use super::{Resolver, overlay};
use crate::error::Result;
use crate::token::{self, TokenMap};

/// Token carrying the `v###` version text inside name templates
pub const VERSION_TOKEN: &str = "ver";

/// Version used when the caller does not pick one
pub const DEFAULT_VERSION: &str = "001";

impl Resolver {
    /// Build an artifact name from a name profile
    ///
    /// The template comes from `globals.name_profiles`, overridden by the
    /// software's own `name_profiles` entry. `<ver>` is set to `v` followed by
    /// `version`. An unknown profile yields an empty name.
    pub fn get_name(
        &self,
        profile: &str,
        tokens: &TokenMap,
        software: Option<&str>,
        version: &str,
    ) -> Result<String> {
        let Some(template) = self.config().name_profile(profile, software) else {
            tracing::warn!("Name profile '{}' not found in job config", profile);
            return Ok(String::new());
        };

        let mut tokens = tokens.clone();
        tokens.insert(VERSION_TOKEN.to_string(), format!("v{version}"));
        let merged = overlay(self.global_tokens(), &tokens);

        token::replace_tokens(template, &merged)
    }
}
