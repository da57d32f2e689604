//! Locates the configuration file for a check run.
//!
//! Priority:
//!
//! 1. `--config` flag, taken as-is
//! 2. `catch-lint.toml` or `.catch-lint.toml` in the analyzed directory or
//!    the nearest ancestor that has one
//! 3. `config.toml` in the global directory (`$CATCH_LINT_CONFIG_DIR`, else
//!    `~/.catch-lint/`)
//! 4. built-in defaults

use std::path::{Path, PathBuf};

/// Project-level config file names, checked in order within a directory.
const PROJECT_CONFIG_NAMES: &[&str] = &["catch-lint.toml", ".catch-lint.toml"];

/// Config file name within the global config directory.
const GLOBAL_CONFIG_NAME: &str = "config.toml";

/// Environment variable overriding the global config directory.
const CONFIG_DIR_ENV: &str = "CATCH_LINT_CONFIG_DIR";

/// Where the configuration comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given on the command line.
    Explicit(PathBuf),
    /// Found next to (or above) the analyzed trees.
    Project(PathBuf),
    /// Found in the global config directory.
    Global(PathBuf),
    /// Nothing found.
    Default,
}

impl ConfigSource {
    /// Returns the config file path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Returns `true` for configs loaded from the global directory.
    #[must_use]
    pub fn is_global(&self) -> bool {
        matches!(self, Self::Global(_))
    }
}

/// Resolves the config for analyzing `target`.
#[must_use]
pub fn resolve(target: &Path, explicit: Option<&Path>) -> ConfigSource {
    let global_dir = std::env::var_os(CONFIG_DIR_ENV)
        .map(PathBuf::from)
        .or_else(|| home::home_dir().map(|h| h.join(".catch-lint")));
    let target = target
        .canonicalize()
        .unwrap_or_else(|_| target.to_path_buf());
    resolve_with(&target, explicit, global_dir.as_deref())
}

fn resolve_with(target: &Path, explicit: Option<&Path>, global_dir: Option<&Path>) -> ConfigSource {
    if let Some(p) = explicit {
        return ConfigSource::Explicit(p.to_path_buf());
    }

    if let Some(found) = find_project_config(target) {
        tracing::debug!("Found project config: {}", found.display());
        return ConfigSource::Project(found);
    }

    global_dir
        .map(|dir| dir.join(GLOBAL_CONFIG_NAME))
        .filter(|p| p.is_file())
        .map_or(ConfigSource::Default, |p| {
            tracing::debug!("Found global config: {}", p.display());
            ConfigSource::Global(p)
        })
}

fn find_project_config(target: &Path) -> Option<PathBuf> {
    target.ancestors().find_map(|dir| {
        PROJECT_CONFIG_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
    })
}
