//! File discovery for the two addressing modes.
//!
//! - `commit`: filter a caller-supplied path list by extension. Non-matching
//!   paths are silently excluded; pre-commit hands over mixed file types.
//! - `root`: recursive glob walk under a root directory. Any walk error
//!   aborts discovery; a partial file set is not authoritative.

use glob::glob;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// How the file set is addressed.
pub enum Mode {
    Commit,
    Root,
}

impl Mode {
    /// Parse the mode token from CLI/config. Unknown tokens are a
    /// configuration error.
    pub fn parse(s: &str) -> Result<Mode, String> {
        match s {
            "commit" => Ok(Mode::Commit),
            "root" => Ok(Mode::Root),
            other => Err(format!(
                "invalid mode '{}': use 'commit' or 'root'",
                other
            )),
        }
    }
}

/// Keep only paths whose extension matches. Order of the input is kept.
pub fn filter_by_extension(paths: &[String], ext: &str) -> Vec<PathBuf> {
    paths
        .iter()
        .map(PathBuf::from)
        .filter(|p| has_extension(p, ext))
        .collect()
}

/// Walk `root` recursively and return every regular file with the
/// extension, sorted for deterministic output. Walk errors (unreadable
/// directory, bad pattern) abort the discovery.
pub fn walk_root(root: &Path, ext: &str) -> Result<Vec<PathBuf>, String> {
    let pattern = root
        .join("**")
        .join(format!("*.{}", ext))
        .to_string_lossy()
        .to_string();
    let entries =
        glob(&pattern).map_err(|e| format!("bad discovery pattern '{}': {}", pattern, e))?;
    let mut files: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| {
            format!(
                "walk failed under '{}': {}",
                root.to_string_lossy(),
                e
            )
        })?;
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension().map(|e| e == ext).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_mode_parse() {
        assert_eq!(Mode::parse("commit").unwrap(), Mode::Commit);
        assert_eq!(Mode::parse("root").unwrap(), Mode::Root);
        assert!(Mode::parse("auto").is_err());
    }

    #[test]
    fn test_filter_excludes_other_extensions_silently() {
        let input = vec![
            "a.py".to_string(),
            "b.md".to_string(),
            "c.py".to_string(),
            "Makefile".to_string(),
        ];
        let out = filter_by_extension(&input, "py");
        assert_eq!(out, vec![PathBuf::from("a.py"), PathBuf::from("c.py")]);
    }

    #[test]
    fn test_walk_finds_nested_files() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("pkg/sub/deep")).unwrap();
        fs::write(root.join("top.py"), "pass\n").unwrap();
        fs::write(root.join("pkg/mid.py"), "pass\n").unwrap();
        fs::write(root.join("pkg/sub/deep/leaf.py"), "pass\n").unwrap();
        fs::write(root.join("pkg/readme.md"), "nope\n").unwrap();

        let files = walk_root(root, "py").unwrap();
        assert_eq!(files.len(), 3);
        // Sorted, so re-running yields identical order.
        let again = walk_root(root, "py").unwrap();
        assert_eq!(files, again);
    }

    #[test]
    fn test_walk_empty_tree() {
        let dir = tempdir().unwrap();
        let files = walk_root(dir.path(), "py").unwrap();
        assert!(files.is_empty());
    }
}
