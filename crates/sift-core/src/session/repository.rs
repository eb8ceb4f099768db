//! Analysis session repository trait.
//!
//! Defines the read-only interface the viewer uses to reach sessions.

use super::model::{SessionDetail, SessionSummary};
use crate::error::Result;
use async_trait::async_trait;
use std::path::Path;

/// A read-only repository of analysis sessions.
///
/// This trait decouples the viewer from the place sessions are produced.
/// The filesystem is the source of truth: implementations must not cache,
/// since sessions are written externally while the viewer runs.
///
/// # Implementation Notes
///
/// Implementations should handle:
/// - Missing or unparsable artifacts as absent values, never as errors
/// - Folder names that do not follow the session convention by skipping them
/// - Concurrent artifact reads where latency matters
#[async_trait]
pub trait AnalysisSessionRepository: Send + Sync {
    /// Lists every session of a project, most recent first.
    ///
    /// # Arguments
    ///
    /// * `project_root` - Root directory of the project
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<SessionSummary>)`: All sessions (empty if the project never ran an analysis)
    /// - `Err(_)`: The analysis directory exists but could not be enumerated
    async fn list_sessions(&self, project_root: &Path) -> Result<Vec<SessionSummary>>;

    /// Loads one session with all of its artifacts.
    ///
    /// # Arguments
    ///
    /// * `project_root` - Root directory of the project
    /// * `session_id` - The session folder name, already URL-decoded
    ///
    /// # Returns
    ///
    /// - `Ok(Some(SessionDetail))`: Session found
    /// - `Ok(None)`: Identifier invalid or session directory absent
    /// - `Err(_)`: Error occurred during retrieval
    async fn find_session(
        &self,
        project_root: &Path,
        session_id: &str,
    ) -> Result<Option<SessionDetail>>;
}
