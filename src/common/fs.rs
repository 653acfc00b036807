//! Common file system operations with unified error handling

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::{self, Result};

/// Copy a directory tree into `dst`, creating it as needed
///
/// Existing files in `dst` are overwritten. Symlinks are followed. Returns the
/// number of files copied.
pub fn copy_tree(src: &Path, dst: &Path) -> Result<usize> {
    let mut copied = 0;

    for entry in WalkDir::new(src).follow_links(true) {
        let entry = entry.map_err(|e| {
            let context = format!("Failed to walk {}", src.display());
            error::fs::io_error(&context, &std::io::Error::from(e))
        })?;
        let relative = entry.path().strip_prefix(src).unwrap_or(entry.path());
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            ensure_dir(&target)?;
        } else {
            fs::copy(entry.path(), &target)
                .map_err(|e| error::fs::write_failed(target.display().to_string(), e.to_string()))?;
            copied += 1;
        }
    }

    Ok(copied)
}

/// Create a directory and its parents
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .map_err(|e| error::fs::write_failed(path.display().to_string(), e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_copy_tree() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join(".[shot]");
        fs::create_dir_all(src.join("3d/.[step]")).unwrap();
        fs::create_dir_all(src.join("comp")).unwrap();
        fs::write(src.join("3d/readme.txt"), "hi").unwrap();

        let dst = temp.path().join("sh010");
        let copied = copy_tree(&src, &dst).unwrap();

        assert_eq!(copied, 1);
        assert!(dst.join("3d/.[step]").is_dir());
        assert!(dst.join("comp").is_dir());
        assert_eq!(fs::read_to_string(dst.join("3d/readme.txt")).unwrap(), "hi");
    }

    #[test]
    fn test_copy_tree_missing_source() {
        let temp = TempDir::new().unwrap();
        assert!(copy_tree(&temp.path().join("nope"), &temp.path().join("out")).is_err());
    }

    #[test]
    fn test_ensure_dir() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("a/b/c");
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
        ensure_dir(&nested).unwrap();
    }
}
