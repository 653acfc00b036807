//! Project creation inside a job
//!
//! New token values become folders. When the parent folder holds a hidden
//! template folder `.[token]`, the new folder starts as a copy of it, so
//! standard sub-folders appear automatically. A new project file is a copy
//! of the software's boilerplate from the job's template directory.

use std::path::{Path, PathBuf};

use crate::common::fs::{copy_tree, ensure_dir};
use crate::error::{self, Result};
use crate::navigate::template_folder_name;
use crate::resolver::Resolver;
use crate::token::{self, TokenMap};

/// Create the folder for one token value if it does not exist yet
///
/// Returns the folder path.
pub fn create_token_folder(
    resolver: &Resolver,
    template: &str,
    tokens: &TokenMap,
    token: &str,
    value: &str,
) -> Result<PathBuf> {
    let parent = PathBuf::from(resolver.get_path(template, tokens, Some(token))?);
    let folder = parent.join(value);
    if folder.is_dir() {
        return Ok(folder);
    }

    let template_folder = parent.join(template_folder_name(token));
    if template_folder.is_dir() {
        let copied = copy_tree(&template_folder, &folder)?;
        tracing::debug!(
            "Created {} from {} ({} files)",
            folder.display(),
            template_folder.display(),
            copied
        );
    } else {
        ensure_dir(&folder)?;
        tracing::debug!("Created {}", folder.display());
    }

    Ok(folder)
}

/// Create a new project file, plus any missing token folders on the way
///
/// Every token of the template must have a value. When `file_name` has no
/// extension the software's first configured extension is appended.
/// Returns the path of the new file.
pub fn create_project(
    resolver: &Resolver,
    template: &str,
    tokens: &TokenMap,
    software: &str,
    file_name: &str,
) -> Result<PathBuf> {
    let missing = resolver.unresolved_tokens(template, tokens)?;
    if !missing.is_empty() {
        return Err(error::token::unresolved(&missing));
    }

    let file_name = with_extension(file_name, resolver.config().extensions(software));
    let extension = Path::new(&file_name)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default();

    let boilerplate =
        PathBuf::from(resolver.template_directory()?).join(format!("{software}{extension}"));
    if !boilerplate.is_file() {
        return Err(error::fs::not_found(boilerplate.display().to_string()));
    }

    let merged = resolver.merged_tokens(tokens);
    for name in resolver.tokens_for(template, tokens)? {
        if let Some(value) = token::lookup(&merged, &name) {
            create_token_folder(resolver, template, tokens, &name, value)?;
        }
    }

    let folder = PathBuf::from(resolver.get_path(template, tokens, None)?);
    ensure_dir(&folder)?;
    let new_file = folder.join(&file_name);
    std::fs::copy(&boilerplate, &new_file)
        .map_err(|e| error::fs::write_failed(new_file.display().to_string(), e.to_string()))?;

    tracing::debug!("Created project file {}", new_file.display());
    Ok(new_file)
}

/// Append the first extension when the name has none
fn with_extension(file_name: &str, extensions: &[String]) -> String {
    if Path::new(file_name).extension().is_some() {
        return file_name.to_string();
    }
    match extensions.first() {
        Some(extension) => format!("{file_name}{extension}"),
        None => {
            tracing::warn!("No file extension configured; keeping '{}' as is", file_name);
            file_name.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::JobConfig;
    use crate::error::JobpathError;
    use std::fs;
    use tempfile::TempDir;

    const TEMPLATE: &str = "<job_path>/<spot>/<shot>/3d";

    fn setup() -> (TempDir, Resolver) {
        let temp = TempDir::new().unwrap();
        let job = temp.path();
        fs::create_dir_all(job.join("pipeline/templates")).unwrap();
        fs::write(job.join("pipeline/templates/maya.ma"), "//Maya ASCII").unwrap();
        fs::create_dir_all(job.join("S01/.[shot]/3d/scenes")).unwrap();

        let config = JobConfig::from_yaml(
            r#"
software:
  maya:
    extensions: [".ma", ".mb"]
  nuke:
    extensions: [".nk"]
template_directory: "<job_path>/pipeline/templates"
"#,
        )
        .unwrap();
        let resolver = Resolver::new(job.to_string_lossy(), config);
        (temp, resolver)
    }

    fn tokens(pairs: &[(&str, &str)]) -> TokenMap {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_create_token_folder_from_template() {
        let (temp, resolver) = setup();
        let folder = create_token_folder(
            &resolver,
            TEMPLATE,
            &tokens(&[("spot", "S01")]),
            "shot",
            "sh010",
        )
        .unwrap();

        assert_eq!(folder, temp.path().join("S01").join("sh010"));
        assert!(folder.join("3d/scenes").is_dir());
    }

    #[test]
    fn test_create_token_folder_without_template() {
        let (temp, resolver) = setup();
        let folder =
            create_token_folder(&resolver, TEMPLATE, &TokenMap::new(), "spot", "S02").unwrap();
        assert_eq!(folder, temp.path().join("S02"));
        assert!(folder.is_dir());
    }

    #[test]
    fn test_create_project() {
        let (temp, resolver) = setup();
        let file = create_project(
            &resolver,
            TEMPLATE,
            &tokens(&[("spot", "S01"), ("shot", "sh010")]),
            "maya",
            "sh010_anim_v001",
        )
        .unwrap();

        assert_eq!(
            file,
            temp.path().join("S01/sh010/3d").join("sh010_anim_v001.ma")
        );
        assert_eq!(fs::read_to_string(&file).unwrap(), "//Maya ASCII");
        assert!(temp.path().join("S01/sh010/3d/scenes").is_dir());
    }

    #[test]
    fn test_create_project_requires_every_token() {
        let (_temp, resolver) = setup();
        let err = create_project(
            &resolver,
            TEMPLATE,
            &tokens(&[("spot", "S01"), ("shot", "")]),
            "maya",
            "x.ma",
        )
        .unwrap_err();
        match err {
            JobpathError::UnresolvedTokens { tokens } => assert_eq!(tokens, "shot"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_create_project_missing_boilerplate() {
        let (_temp, resolver) = setup();
        let err = create_project(
            &resolver,
            TEMPLATE,
            &tokens(&[("spot", "S01"), ("shot", "sh010")]),
            "nuke",
            "comp",
        )
        .unwrap_err();
        assert!(matches!(err, JobpathError::FileNotFound { .. }));
    }

    #[test]
    fn test_with_extension() {
        let exts = vec![".ma".to_string(), ".mb".to_string()];
        assert_eq!(with_extension("shot", &exts), "shot.ma");
        assert_eq!(with_extension("shot.mb", &exts), "shot.mb");
        assert_eq!(with_extension("shot", &[]), "shot");
    }
}
