//! Directory listings that feed token choices
//!
//! These back the pickers of a launcher: which jobs live in a jobs folder,
//! which values a token can take given the tokens picked so far, and which
//! project files sit in a resolved folder. Unreadable folders list as empty.

use std::path::Path;

use walkdir::WalkDir;

use crate::config::CONFIG_FILE_NAME;
use crate::error::Result;
use crate::resolver::Resolver;
use crate::token::TokenMap;

/// Name of the hidden folder used as the template for a token's new values
pub fn template_folder_name(token: &str) -> String {
    format!(".[{token}]")
}

/// Sorted names of the direct entries of `dir` that pass `keep`
fn list_entries(dir: &Path, keep: impl Fn(&walkdir::DirEntry) -> bool) -> Vec<String> {
    let mut names: Vec<String> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| keep(entry))
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Jobs in a jobs folder: sub-directories holding a `config.yml`
pub fn list_jobs(jobs_dir: &Path) -> Vec<String> {
    list_entries(jobs_dir, |entry| {
        entry.file_type().is_dir() && entry.path().join(CONFIG_FILE_NAME).is_file()
    })
}

/// Values a token can take under the tokens chosen so far
///
/// Lists the folders at the template's path cut at `token`, without the
/// token's excludes and its `.[token]` template folder.
pub fn list_token_values(
    resolver: &Resolver,
    template: &str,
    tokens: &TokenMap,
    token: &str,
) -> Result<Vec<String>> {
    let parent = resolver.get_path(template, tokens, Some(token))?;
    let excludes = resolver.get_excludes(token);
    let template_folder = template_folder_name(token);

    Ok(list_entries(Path::new(&parent), |entry| entry.file_type().is_dir())
        .into_iter()
        .filter(|name| *name != template_folder && !excludes.contains(name))
        .collect())
}

/// Plain files in a folder, optionally limited to some extensions
///
/// Extensions are matched case-insensitively against the end of the name.
pub fn list_files(dir: &Path, extensions: &[String]) -> Vec<String> {
    let extensions: Vec<String> = extensions.iter().map(|e| e.to_lowercase()).collect();
    list_entries(dir, |entry| {
        if !entry.file_type().is_file() {
            return false;
        }
        let name = entry.file_name().to_string_lossy().to_lowercase();
        extensions.is_empty() || extensions.iter().any(|ext| name.ends_with(ext.as_str()))
    })
}
