//! Directory-backed AnalysisSessionRepository implementation
//!
//! Sessions are discovered by scanning the analysis directory of a project
//! on every request. Nothing is cached; the filesystem is the source of truth.

use crate::artifact_reader::ArtifactReader;
use crate::paths::SiftPaths;
use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use sift_core::config::{AnalysisConfig, RootConfig};
use sift_core::error::{Result, SiftError};
use sift_core::session::{
    AnalysisSessionRepository, SessionDetail, SessionIdentity, SessionNameParser,
    SessionSummary, sort_summaries,
};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs;

/// Directory-backed analysis session repository.
///
/// Directory structure:
/// ```text
/// project_root/
/// └── .workflow/.analysis/
///     ├── ANL-auth-flow-2026-01-05/
///     │   ├── discussion.md
///     │   ├── conclusions.json
///     │   ├── explorations.json
///     │   └── perspectives.json
///     └── ANL-cache-layer-2026-02-15/
///         └── discussion.md
/// ```
pub struct AsyncDirAnalysisSessionRepository {
    analysis: AnalysisConfig,
    parser: SessionNameParser,
    reader: ArtifactReader,
    detail_timeout: Duration,
    read_concurrency: usize,
}

impl AsyncDirAnalysisSessionRepository {
    /// Creates a repository using the layout and limits from `config`.
    pub fn new(config: &RootConfig) -> Self {
        Self {
            analysis: config.analysis.clone(),
            parser: SessionNameParser::new(&config.analysis.session_prefix),
            reader: ArtifactReader::from_limits(&config.limits),
            detail_timeout: config.limits.detail_timeout(),
            read_concurrency: config.limits.read_concurrency(),
        }
    }

    /// Returns the analysis directory of `project_root`.
    pub fn analysis_dir(&self, project_root: &Path) -> PathBuf {
        SiftPaths::analysis_dir(project_root, &self.analysis)
    }

    /// Builds the summary of one candidate folder, or `None` if it is not a directory.
    async fn summarize(
        &self,
        session_dir: PathBuf,
        name: String,
        identity: SessionIdentity,
    ) -> Option<SessionSummary> {
        if !self.reader.is_dir(&session_dir).await {
            tracing::debug!("Skipping non-directory entry: {}", session_dir.display());
            return None;
        }

        let conclusions = self
            .reader
            .read_structured(&session_dir.join(&self.analysis.conclusions_file))
            .await;

        Some(SessionSummary::derive(&name, &identity, conclusions.as_ref()))
    }

    /// Reads all four artifacts of a session concurrently.
    async fn load_detail(
        &self,
        session_dir: &Path,
        session_id: &str,
        identity: &SessionIdentity,
    ) -> SessionDetail {
        let discussion_path = session_dir.join(&self.analysis.discussion_file);
        let conclusions_path = session_dir.join(&self.analysis.conclusions_file);
        let explorations_path = session_dir.join(&self.analysis.explorations_file);
        let perspectives_path = session_dir.join(&self.analysis.perspectives_file);

        let (discussion, conclusions, explorations, perspectives) = tokio::join!(
            self.reader.read_text(&discussion_path),
            self.reader.read_structured(&conclusions_path),
            self.reader.read_structured(&explorations_path),
            self.reader.read_structured(&perspectives_path),
        );

        SessionDetail::assemble(
            session_id,
            identity,
            discussion,
            conclusions,
            explorations,
            perspectives,
        )
    }
}

impl Default for AsyncDirAnalysisSessionRepository {
    fn default() -> Self {
        Self::new(&RootConfig::default())
    }
}

#[async_trait]
impl AnalysisSessionRepository for AsyncDirAnalysisSessionRepository {
    async fn list_sessions(&self, project_root: &Path) -> Result<Vec<SessionSummary>> {
        let analysis_dir = self.analysis_dir(project_root);

        // A project that never ran an analysis simply has no sessions.
        match fs::try_exists(&analysis_dir).await {
            Ok(true) => {}
            Ok(false) => {
                tracing::debug!("No analysis directory at {}", analysis_dir.display());
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(SiftError::internal(format!(
                    "Failed to access analysis directory {}: {}",
                    analysis_dir.display(),
                    e
                )));
            }
        }

        let mut entries = fs::read_dir(&analysis_dir).await.map_err(|e| {
            SiftError::internal(format!(
                "Failed to read analysis directory {}: {}",
                analysis_dir.display(),
                e
            ))
        })?;

        let mut candidates = Vec::new();
        loop {
            let entry = entries.next_entry().await.map_err(|e| {
                SiftError::internal(format!(
                    "Failed to enumerate analysis directory {}: {}",
                    analysis_dir.display(),
                    e
                ))
            })?;
            let Some(entry) = entry else {
                break;
            };

            // Non-UTF-8 names can never match the session pattern.
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };
            let Some(identity) = self.parser.parse(&name) else {
                continue;
            };
            candidates.push((entry.path(), name, identity));
        }

        // Order is restored by the sort below.
        let mut sessions: Vec<SessionSummary> = stream::iter(candidates)
            .map(|(path, name, identity)| self.summarize(path, name, identity))
            .buffer_unordered(self.read_concurrency)
            .filter_map(|summary| async move { summary })
            .collect()
            .await;

        // Sort by created_at descending (most recent first)
        sort_summaries(&mut sessions);

        tracing::info!(
            "Listed {} analysis sessions in {}",
            sessions.len(),
            analysis_dir.display()
        );
        Ok(sessions)
    }

    async fn find_session(
        &self,
        project_root: &Path,
        session_id: &str,
    ) -> Result<Option<SessionDetail>> {
        let Some(identity) = self.parser.parse(session_id) else {
            tracing::debug!("Rejected session identifier: {:?}", session_id);
            return Ok(None);
        };

        let session_dir = SiftPaths::session_dir(project_root, &self.analysis, session_id);
        if !self.reader.is_dir(&session_dir).await {
            tracing::debug!("Session directory not found: {}", session_dir.display());
            return Ok(None);
        }

        let detail = tokio::time::timeout(
            self.detail_timeout,
            self.load_detail(&session_dir, session_id, &identity),
        )
        .await
        .map_err(|_| {
            SiftError::internal(format!(
                "Timed out after {}ms reading session '{}'",
                self.detail_timeout.as_millis(),
                session_id
            ))
        })?;

        tracing::info!(
            "Loaded session {} ({})",
            session_id,
            detail.status().label()
        );
        Ok(Some(detail))
    }
}
