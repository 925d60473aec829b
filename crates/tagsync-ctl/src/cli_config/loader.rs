//! Discovery of `.tagsync.toml`.
//!
//! The project file in the working directory shadows the user file at
//! `~/.config/tagsync.toml`; the two are never merged. A file that cannot be
//! read or parsed is reported and skipped in favour of the built-in defaults,
//! since the generator needs no configuration to run.

use std::path::{Path, PathBuf};

use super::CliConfig;

const PROJECT_FILE: &str = ".tagsync.toml";
const USER_FILE: [&str; 2] = [".config", "tagsync.toml"];

/// Load the first config file found, or defaults.
pub(crate) fn load_cli_config() -> CliConfig {
    let candidates = candidate_paths(Path::new("."), home_dir().as_deref());
    match candidates.iter().find(|path| path.is_file()) {
        Some(path) => read_config(path).unwrap_or_default(),
        None => CliConfig::default(),
    }
}

/// Config locations, highest precedence first.
fn candidate_paths(project_dir: &Path, home: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = vec![project_dir.join(PROJECT_FILE)];
    if let Some(home) = home {
        paths.push(USER_FILE.iter().fold(home.to_path_buf(), |dir, part| dir.join(part)));
    }
    paths
}

fn read_config(path: &Path) -> Option<CliConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| tracing::warn!(path = %path.display(), error = %e, "Cannot read config file"))
        .ok()?;
    let config = toml::from_str(&contents)
        .map_err(|e| tracing::warn!(path = %path.display(), error = %e, "Ignoring invalid config file"))
        .ok()?;
    tracing::debug!(path = %path.display(), "Using config file");
    Some(config)
}

/// Resolve a leading `~/` against `$HOME`; other paths pass through.
pub(crate) fn expand_path(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}
