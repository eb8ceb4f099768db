//! Unified path management for sift.
//!
//! Configuration lives in the platform config directory; analysis sessions
//! live under each project's root.

use sift_core::config::AnalysisConfig;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the configuration file location.
pub const CONFIG_ENV: &str = "SIFT_CONFIG";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for sift.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/sift/              # Config directory (dirs::config_dir)
/// └── config.toml              # Application configuration
///
/// <project_root>/
/// └── .workflow/.analysis/     # Analysis directory (configurable)
///     └── ANL-<slug>-<date>/   # One session
///         ├── discussion.md
///         ├── conclusions.json
///         ├── explorations.json
///         └── perspectives.json
/// ```
pub struct SiftPaths;

impl SiftPaths {
    /// Returns the sift configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to config directory (e.g., `~/.config/sift/`)
    /// - `Err(PathError::ConfigDirNotFound)`: Could not determine directory
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("sift"))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path to the main configuration file.
    ///
    /// `$SIFT_CONFIG` wins over the platform location when set.
    pub fn config_file() -> Result<PathBuf, PathError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the analysis directory of a project.
    pub fn analysis_dir(project_root: &Path, analysis: &AnalysisConfig) -> PathBuf {
        project_root.join(&analysis.directory)
    }

    /// Returns the directory of one session. The name is not validated here.
    pub fn session_dir(project_root: &Path, analysis: &AnalysisConfig, session_id: &str) -> PathBuf {
        Self::analysis_dir(project_root, analysis).join(session_id)
    }
}
