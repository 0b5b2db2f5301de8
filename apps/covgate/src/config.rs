//! Configuration discovery and effective settings resolution.
//!
//! Covgate reads `covgate.toml|yaml|yml` from the repository root (or
//! closest ancestor) and merges it with CLI arguments to produce an
//! `Effective` config. Defaults:
//! - `coverage`: `coverage/coverage-final.json`
//! - `baseline_dir`: `coverage-baseline`
//! - `output`: `json`
//!
//! Overrides precedence: CLI > config file > defaults. The pass/fail
//! thresholds are deliberately not configurable; see `compare`.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Default location of the coverage report relative to the repo root.
pub const DEFAULT_COVERAGE_PATH: &str = "coverage/coverage-final.json";

/// Default baseline directory relative to the repo root.
pub const DEFAULT_BASELINE_DIR: &str = "coverage-baseline";

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `covgate.toml|yaml`.
pub struct CovgateConfig {
    pub coverage: Option<String>,
    pub baseline_dir: Option<String>,
    pub output: Option<String>,
}

#[derive(Debug, Clone)]
/// Fully-resolved settings used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub coverage_path: PathBuf,
    pub baseline_dir: PathBuf,
    pub output: String,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `covgate.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if cur.join("covgate.toml").exists()
            || cur.join("covgate.yaml").exists()
            || cur.join("covgate.yml").exists()
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

/// Load `CovgateConfig` from `covgate.toml` or `covgate.yaml|yml` if present.
pub fn load_config(root: &Path) -> Option<CovgateConfig> {
    let toml_path = root.join("covgate.toml");
    if toml_path.exists() {
        let s = fs::read_to_string(&toml_path).ok()?;
        let cfg: CovgateConfig = toml::from_str(&s).ok()?;
        return Some(cfg);
    }
    for yml in ["covgate.yaml", "covgate.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = fs::read_to_string(&p).ok()?;
            let cfg: CovgateConfig = serde_yaml::from_str(&s).ok()?;
            return Some(cfg);
        }
    }
    None
}

/// Resolve `Effective` by merging CLI arguments, discovered config, and
/// defaults. Relative paths are anchored at the repo root.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_coverage: Option<&str>,
    cli_baseline_dir: Option<&str>,
    cli_output: Option<&str>,
) -> Effective {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let cfg = load_config(&repo_root).unwrap_or_default();

    let coverage = cli_coverage
        .map(|s| s.to_string())
        .or(cfg.coverage)
        .unwrap_or_else(|| DEFAULT_COVERAGE_PATH.to_string());

    let baseline_dir = cli_baseline_dir
        .map(|s| s.to_string())
        .or(cfg.baseline_dir)
        .unwrap_or_else(|| DEFAULT_BASELINE_DIR.to_string());

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "json".to_string());

    Effective {
        coverage_path: repo_root.join(coverage),
        baseline_dir: repo_root.join(baseline_dir),
        repo_root,
        output,
    }
}
