//! Root configuration model.
//!
//! Every field carries a default so that a missing or partial `config.toml`
//! still yields a usable configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default analysis directory, relative to a project root.
pub const DEFAULT_ANALYSIS_DIR: &str = ".workflow/.analysis";

/// Default literal prefix of a session folder name.
pub const DEFAULT_SESSION_PREFIX: &str = "ANL";

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct RootConfig {
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
}

/// Where sessions live and what their artifacts are called.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Analysis directory relative to the project root.
    pub directory: String,
    /// Literal prefix every session folder name starts with.
    pub session_prefix: String,
    pub discussion_file: String,
    pub conclusions_file: String,
    pub explorations_file: String,
    pub perspectives_file: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            directory: DEFAULT_ANALYSIS_DIR.to_string(),
            session_prefix: DEFAULT_SESSION_PREFIX.to_string(),
            discussion_file: "discussion.md".to_string(),
            conclusions_file: "conclusions.json".to_string(),
            explorations_file: "explorations.json".to_string(),
            perspectives_file: "perspectives.json".to_string(),
        }
    }
}

/// Resource bounds for artifact reads.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LimitsConfig {
    /// Artifacts larger than this are treated as absent.
    pub max_artifact_bytes: u64,
    /// Upper bound on a single detail request, in milliseconds.
    pub detail_timeout_ms: u64,
    /// Deepest array/object nesting a JSON artifact may have. Deeper
    /// documents are treated as absent.
    pub max_json_depth: usize,
    /// Session folders read at the same time while listing.
    pub max_concurrent_reads: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_artifact_bytes: 8 * 1024 * 1024,
            detail_timeout_ms: 10_000,
            max_json_depth: 1024,
            max_concurrent_reads: 16,
        }
    }
}

impl LimitsConfig {
    pub fn detail_timeout(&self) -> Duration {
        Duration::from_millis(self.detail_timeout_ms)
    }

    /// Concurrency for listing, never below one.
    pub fn read_concurrency(&self) -> usize {
        self.max_concurrent_reads.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_yields_defaults() {
        let config: RootConfig = toml::from_str("").unwrap();
        assert_eq!(config, RootConfig::default());
        assert_eq!(config.analysis.directory, ".workflow/.analysis");
        assert_eq!(config.analysis.session_prefix, "ANL");
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: RootConfig = toml::from_str(
            r#"
            [analysis]
            session_prefix = "RUN"

            [limits]
            detail_timeout_ms = 250
            "#,
        )
        .unwrap();

        assert_eq!(config.analysis.session_prefix, "RUN");
        assert_eq!(config.analysis.conclusions_file, "conclusions.json");
        assert_eq!(config.limits.detail_timeout(), Duration::from_millis(250));
        assert_eq!(config.limits.max_artifact_bytes, 8 * 1024 * 1024);
        assert_eq!(config.limits.max_json_depth, 1024);
    }

    #[test]
    fn test_zero_concurrency_is_clamped() {
        let config: RootConfig = toml::from_str("[limits]\nmax_concurrent_reads = 0\n").unwrap();
        assert_eq!(config.limits.read_concurrency(), 1);
        assert_eq!(LimitsConfig::default().read_concurrency(), 16);
    }
}
