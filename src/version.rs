//! Version markers in file names and paths
//!
//! A version marker is `_v` (either case) followed by digits, e.g.
//! `shot_v003.ma`. A path may repeat the marker (`v003/shot_v003.ma`) as long
//! as every occurrence carries the same number.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{self, Result};

/// Matches a version marker; group 1 is the digit run.
#[allow(clippy::expect_used)]
pub(crate) static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_[vV](\d+)").expect("version pattern is valid"));

/// Get the version number of a path as text
///
/// With `padded`, the digits are returned as written (`"003"`); otherwise
/// leading zeros are stripped (`"3"`, and `"0"` for an all-zero run).
///
/// # Examples
/// ```
/// use jobpath::version::get_version_str;
/// assert_eq!(get_version_str("shot_v03.ma", true).unwrap(), "03");
/// assert_eq!(get_version_str("shot_v03.ma", false).unwrap(), "3");
/// assert!(get_version_str("shot_v03_v04.ma", true).is_err());
/// ```
///
/// # Errors
/// `InvalidVersion` when the path has no marker or markers disagree.
pub fn get_version_str(path: &str, padded: bool) -> Result<String> {
    let mut versions = VERSION_RE
        .captures_iter(path)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()));

    let Some(first) = versions.next() else {
        return Err(error::version::invalid(path));
    };
    if versions.any(|other| other != first) {
        return Err(error::version::invalid(path));
    }

    if padded {
        return Ok(first.to_string());
    }
    let trimmed = first.trim_start_matches('0');
    Ok(if trimmed.is_empty() { "0" } else { trimmed }.to_string())
}

/// Get the version number of a path
pub fn get_version_int(path: &str) -> Result<u64> {
    get_version_str(path, true)?
        .parse()
        .map_err(|_| error::version::invalid(path))
}

/// Increment every version marker in a path
///
/// The new number keeps the original digit width (`v009` becomes `v010`) and
/// only grows wider when it has to (`v99` becomes `v100`).
///
/// # Examples
/// ```
/// use jobpath::version::increment_version;
/// assert_eq!(increment_version("a_v009_b.ext").unwrap(), "a_v010_b.ext");
/// assert_eq!(increment_version("a_v099_b.ext").unwrap(), "a_v100_b.ext");
/// ```
pub fn increment_version(path: &str) -> Result<String> {
    let current = get_version_str(path, true)?;
    let next = current
        .parse::<u64>()
        .ok()
        .and_then(|n| n.checked_add(1))
        .ok_or_else(|| error::version::invalid(path))?;
    let next = format!("{next:0width$}", width = current.len());

    Ok(VERSION_RE
        .replace_all(path, |caps: &regex::Captures<'_>| {
            // keep the "_v" / "_V" prefix as written
            format!("{}{}", &caps[0][..2], next)
        })
        .into_owned())
}

/// Outcome of [`version_up`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionUp {
    /// The incremented path
    pub path: PathBuf,
    /// Whether a file already sits at the incremented path
    pub exists: bool,
}

/// Increment a path's version and report whether the target is taken
///
/// With `only_filename`, markers in the directory part are left untouched.
/// Deciding whether to overwrite an existing file is up to the caller.
pub fn version_up(path: &Path, only_filename: bool) -> Result<VersionUp> {
    let incremented = if only_filename {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| error::version::invalid(path.display().to_string()))?;
        let new_name = increment_version(&file_name)?;
        match path.parent() {
            Some(parent) => parent.join(new_name),
            None => PathBuf::from(new_name),
        }
    } else {
        PathBuf::from(increment_version(&path.to_string_lossy())?)
    };

    let exists = incremented.is_file();
    if exists {
        tracing::debug!("Version target already exists: {}", incremented.display());
    }
    Ok(VersionUp {
        path: incremented,
        exists,
    })
}
