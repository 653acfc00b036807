//! Publish names derived from working file names

use crate::error::{self, Result};
use crate::version::VERSION_RE;

/// Text that marks a published file
pub const PUBLISH_TAG: &str = "PUBLISH";

/// Derive the publish name of a working file
///
/// - no version marker: `_PUBLISH` goes before the extension
/// - one marker: the `_v###` span becomes `PUBLISH`
/// - more markers: the rewrite target is ambiguous and an error is returned
///
/// # Examples
/// ```
/// use jobpath::publish::create_pub_name;
/// assert_eq!(create_pub_name("shot_v03.ma").unwrap(), "shotPUBLISH.ma");
/// assert_eq!(create_pub_name("shot.ma").unwrap(), "shot_PUBLISH.ma");
/// assert!(create_pub_name("shot_v01_v02.ma").is_err());
/// ```
pub fn create_pub_name(name: &str) -> Result<String> {
    let markers: Vec<_> = VERSION_RE.find_iter(name).collect();

    match markers.as_slice() {
        [] => {
            let (stem, extension) = split_extension(name);
            Ok(format!("{stem}_{PUBLISH_TAG}{extension}"))
        }
        [marker] => Ok(format!(
            "{}{PUBLISH_TAG}{}",
            &name[..marker.start()],
            &name[marker.end()..]
        )),
        _ => Err(error::publish::ambiguous(name, markers.len())),
    }
}

/// Split off the extension (with its dot) of the last path component.
///
/// A leading dot (`.hidden`) is part of the stem, not an extension.
fn split_extension(name: &str) -> (&str, &str) {
    let component_start = name.rfind(|c: char| c == '/' || c == '\\').map_or(0, |i| i + 1);
    match name[component_start..].rfind('.') {
        Some(0) | None => (name, ""),
        Some(dot) => name.split_at(component_start + dot),
    }
}
