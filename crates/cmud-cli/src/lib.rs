//! # cmud-cli — CLI Tool for Legacy Zone Files
//!
//! Provides the `cmud` command-line interface over `cmud-core` and
//! `cmud-convert`.
//!
//! ## Subcommands
//!
//! - `cmud validate` — Parse zone files and load them into a zone table.
//! - `cmud convert` — Write a zone file as a JSON or YAML document.
//!
//! ```bash
//! cmud validate lib/world/zon
//! cmud validate --keep-going 30.zon 31.zon
//! cmud --output-dir build convert 30.zon --format yaml
//! ```

pub mod config;
pub mod convert;
pub mod validate;

use std::path::{Path, PathBuf};

/// Resolve a path that may be relative to a base directory.
///
/// If the path is absolute, returns it as-is. If relative and the file
/// exists relative to `base`, uses that. Otherwise returns the path
/// relative to the current directory.
pub fn resolve_path(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    let based = base.join(path);
    if based.exists() {
        based
    } else {
        path.to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_path_absolute_path_returned_as_is() {
        let base = Path::new("/srv/mud/lib/world/zon");
        let result = resolve_path(Path::new("/tmp/30.zon"), base);
        assert_eq!(result, PathBuf::from("/tmp/30.zon"));
    }

    #[test]
    fn resolve_path_relative_path_exists_in_base() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("30.zon"), b"").unwrap();

        let result = resolve_path(Path::new("30.zon"), dir.path());
        assert_eq!(result, dir.path().join("30.zon"));
    }

    #[test]
    fn resolve_path_relative_path_missing_in_base() {
        let dir = tempfile::tempdir().unwrap();
        let result = resolve_path(Path::new("missing.zon"), dir.path());
        assert_eq!(result, PathBuf::from("missing.zon"));
    }

    #[test]
    fn resolve_path_relative_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("world").join("zon")).unwrap();

        let result = resolve_path(Path::new("world/zon"), dir.path());
        assert_eq!(result, dir.path().join("world/zon"));
    }
}
