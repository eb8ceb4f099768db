//! Configuration service implementation.
//!
//! This module provides a ConfigService that loads the root configuration
//! from the configuration file (~/.config/sift/config.toml).

use crate::paths::SiftPaths;
use sift_core::config::RootConfig;
use sift_core::error::{Result, SiftError};
use std::path::{Path, PathBuf};

/// Loads [`RootConfig`] from a TOML file.
///
/// A missing file is not an error: every field has a default.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    /// Creates a ConfigService reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a ConfigService at the default location (`$SIFT_CONFIG` or
    /// `~/.config/sift/config.toml`).
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined.
    pub fn default_location() -> Result<Self> {
        let path = SiftPaths::config_file().map_err(|e| SiftError::config(e.to_string()))?;
        Ok(Self::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the configuration.
    ///
    /// # Returns
    ///
    /// - `Ok(RootConfig)`: Parsed config, or defaults if the file does not exist
    /// - `Err(SiftError::Config)`: The file exists but cannot be read or parsed
    pub fn load(&self) -> Result<RootConfig> {
        if !self.path.exists() {
            tracing::debug!(
                "No config file at {}, using defaults",
                self.path.display()
            );
            return Ok(RootConfig::default());
        }

        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            SiftError::config(format!("Failed to read {}: {}", self.path.display(), e))
        })?;

        let config: RootConfig = toml::from_str(&content).map_err(|e| {
            SiftError::config(format!("Failed to parse {}: {}", self.path.display(), e))
        })?;

        tracing::debug!("Loaded config from {}", self.path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::new(temp_dir.path().join("config.toml"));

        assert_eq!(service.load().unwrap(), RootConfig::default());
    }

    #[test]
    fn test_loads_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[analysis]\ndirectory = \"out/analysis\"\n\n[limits]\nmax_artifact_bytes = 1024\n",
        )
        .unwrap();

        let config = ConfigService::new(&path).load().unwrap();
        assert_eq!(config.analysis.directory, "out/analysis");
        assert_eq!(config.analysis.session_prefix, "ANL");
        assert_eq!(config.limits.max_artifact_bytes, 1024);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[analysis\nbroken").unwrap();

        let err = ConfigService::new(&path).load().unwrap_err();
        assert!(matches!(err, SiftError::Config(_)));
    }
}
