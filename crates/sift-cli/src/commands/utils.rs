use anyhow::{Context, Result};
use sift_core::config::{AnalysisConfig, RootConfig};
use sift_infrastructure::{ConfigService, SiftPaths};
use std::env;
use std::path::{Path, PathBuf};

/// Loads the effective configuration from the default location.
pub fn load_config() -> Result<RootConfig> {
    let service = ConfigService::default_location()?;
    let config = service
        .load()
        .with_context(|| format!("Failed to load {}", service.path().display()))?;
    Ok(config)
}

/// Resolves the project root to read sessions from.
///
/// An explicit `--project` wins. Otherwise the search walks upward from the
/// current directory to the first ancestor holding an analysis directory,
/// and falls back to the current directory itself.
pub fn resolve_project_root(
    explicit: Option<PathBuf>,
    analysis: &AnalysisConfig,
) -> Result<PathBuf> {
    if let Some(project) = explicit {
        return Ok(project);
    }
    let cwd = env::current_dir().context("Failed to get current directory")?;
    let root = find_project_root(&cwd, analysis).unwrap_or(cwd);
    tracing::debug!("Using project root {}", root.display());
    Ok(root)
}

fn find_project_root(start: &Path, analysis: &AnalysisConfig) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| SiftPaths::analysis_dir(dir, analysis).is_dir())
        .map(Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_explicit_project_wins() {
        let analysis = AnalysisConfig::default();
        let root = resolve_project_root(Some(PathBuf::from("/somewhere")), &analysis).unwrap();
        assert_eq!(root, PathBuf::from("/somewhere"));
    }

    #[test]
    fn test_find_project_root_from_nested_dir() {
        let temp_dir = TempDir::new().unwrap();
        let analysis = AnalysisConfig::default();
        std::fs::create_dir_all(temp_dir.path().join(".workflow/.analysis")).unwrap();
        let nested = temp_dir.path().join("src").join("deep");
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(
            find_project_root(&nested, &analysis),
            Some(temp_dir.path().to_path_buf())
        );
    }
}
