//! Configuration discovery and effective settings resolution.
//!
//! Comche reads `comche.toml|yaml|yml` from the repository root (or the
//! closest ancestor), falling back to a `[tool.comche]` table inside
//! `pyproject.toml`. Defaults:
//! - `tags`: TODO, BUG, FIXME
//! - `fail`: 0 (any finding fails the run)
//! - `mode`: `commit`
//! - `dir`: `.`
//! - `extension`: `py`
//! - `comment`: `#`
//! - `output`: `human`
//!
//! Overrides precedence: CLI > config file > defaults. A config file that
//! exists but does not parse is a fatal configuration error; scanning with
//! a half-understood tag set would silently miss findings.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `comche.toml|yaml` or `[tool.comche]`.
pub struct ComcheConfig {
    pub tags: Option<Vec<String>>,
    pub fail: Option<usize>,
    pub mode: Option<String>,
    pub dir: Option<String>,
    pub extension: Option<String>,
    pub comment: Option<String>,
    pub output: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct PyProject {
    #[serde(default)]
    tool: PyProjectTool,
}

#[derive(Debug, Default, Deserialize)]
struct PyProjectTool {
    #[serde(default)]
    comche: Option<ComcheConfig>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by the scan after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub tags: Vec<String>,
    pub fail: usize,
    pub mode: String,
    pub dir: String,
    pub extension: String,
    pub comment: String,
    pub output: String,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `comche.toml|yaml|yml`, a `pyproject.toml`, or a `.git`
/// directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if cur.join("comche.toml").exists()
            || cur.join("comche.yaml").exists()
            || cur.join("comche.yml").exists()
            || cur.join("pyproject.toml").exists()
        {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `ComcheConfig` if a config source is present.
///
/// Returns `Ok(None)` when no source exists. A source that exists but
/// fails to parse is an error naming the file.
pub fn load_config(root: &Path) -> Result<Option<ComcheConfig>, String> {
    let toml_path = root.join("comche.toml");
    if toml_path.exists() {
        let s = fs::read_to_string(&toml_path)
            .map_err(|e| format!("cannot read {}: {}", toml_path.to_string_lossy(), e))?;
        let cfg: ComcheConfig = toml::from_str(&s)
            .map_err(|e| format!("{} is not valid TOML: {}", toml_path.to_string_lossy(), e))?;
        return Ok(Some(cfg));
    }
    for yml in ["comche.yaml", "comche.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = fs::read_to_string(&p)
                .map_err(|e| format!("cannot read {}: {}", p.to_string_lossy(), e))?;
            let cfg: ComcheConfig = serde_yaml::from_str(&s)
                .map_err(|e| format!("{} is not valid YAML: {}", p.to_string_lossy(), e))?;
            return Ok(Some(cfg));
        }
    }
    let py_path = root.join("pyproject.toml");
    if py_path.exists() {
        let s = fs::read_to_string(&py_path)
            .map_err(|e| format!("cannot read {}: {}", py_path.to_string_lossy(), e))?;
        let py: PyProject = toml::from_str(&s)
            .map_err(|e| format!("{} is not valid TOML: {}", py_path.to_string_lossy(), e))?;
        return Ok(py.tool.comche);
    }
    Ok(None)
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
#[allow(clippy::too_many_arguments)]
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_tags: Option<&str>,
    cli_fail: Option<usize>,
    cli_mode: Option<&str>,
    cli_dir: Option<&str>,
    cli_extension: Option<&str>,
    cli_comment: Option<&str>,
    cli_output: Option<&str>,
) -> Result<Effective, String> {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let cfg = load_config(&repo_root)?.unwrap_or_default();

    let tags = match cli_tags {
        Some(s) => split_tags(s),
        None => cfg
            .tags
            .unwrap_or_else(|| vec!["TODO".into(), "BUG".into(), "FIXME".into()]),
    };

    let fail = cli_fail.or(cfg.fail).unwrap_or(0);

    let mode = cli_mode
        .map(|s| s.to_string())
        .or(cfg.mode)
        .unwrap_or_else(|| "commit".to_string());

    let dir = cli_dir
        .map(|s| s.to_string())
        .or(cfg.dir)
        .unwrap_or_else(|| ".".to_string());

    let extension = cli_extension
        .map(|s| s.to_string())
        .or(cfg.extension)
        .unwrap_or_else(|| "py".to_string());

    let comment = cli_comment
        .map(|s| s.to_string())
        .or(cfg.comment)
        .unwrap_or_else(|| "#".to_string());

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    Ok(Effective {
        repo_root,
        tags,
        fail,
        mode,
        dir,
        extension,
        comment,
        output,
    })
}

/// Split a comma-separated tag list, dropping empty segments.
pub fn split_tags(s: &str) -> Vec<String> {
    s.split(',')
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}
