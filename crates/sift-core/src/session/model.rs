//! Analysis session domain model.
//!
//! Records here are views of the filesystem: they are rebuilt on every
//! request and never persisted or mutated.

use super::identity::SessionIdentity;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A parsed JSON artifact. Artifacts are always JSON objects at the top level.
pub type StructuredArtifact = Map<String, Value>;

/// Lifecycle status of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// No parsable conclusions artifact yet.
    InProgress,
    /// A conclusions artifact exists and parsed successfully.
    Completed,
}

impl SessionStatus {
    /// Derives the status from the result of reading the conclusions artifact.
    pub fn from_conclusions(conclusions: Option<&StructuredArtifact>) -> Self {
        match conclusions {
            Some(_) => Self::Completed,
            None => Self::InProgress,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }
}

/// The fields of the conclusions artifact that the viewer relies on.
///
/// Extraction never fails: a missing, non-string or blank `topic` reads as
/// `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConclusionsHeader {
    pub topic: Option<String>,
}

impl ConclusionsHeader {
    pub fn extract(conclusions: &StructuredArtifact) -> Self {
        let topic = conclusions
            .get("topic")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|topic| !topic.is_empty())
            .map(str::to_string);
        Self { topic }
    }
}

/// One row of the session list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    /// Raw folder name; the stable identity of the session.
    pub id: String,
    /// Same as `id`.
    pub name: String,
    pub topic: String,
    pub created_at: NaiveDate,
    pub status: SessionStatus,
    pub has_conclusions: bool,
}

impl SessionSummary {
    /// Builds a summary from a folder's identity and its conclusions read.
    ///
    /// # Arguments
    ///
    /// * `folder_name` - The raw session folder name
    /// * `identity` - The identity decoded from `folder_name`
    /// * `conclusions` - The parsed conclusions artifact, if any
    pub fn derive(
        folder_name: &str,
        identity: &SessionIdentity,
        conclusions: Option<&StructuredArtifact>,
    ) -> Self {
        let topic = conclusions
            .and_then(|c| ConclusionsHeader::extract(c).topic)
            .unwrap_or_else(|| identity.fallback_topic());
        let status = SessionStatus::from_conclusions(conclusions);

        Self {
            id: folder_name.to_string(),
            name: folder_name.to_string(),
            topic,
            created_at: identity.date,
            status,
            has_conclusions: conclusions.is_some(),
        }
    }
}

/// A session with its full artifact bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDetail {
    #[serde(flatten)]
    pub summary: SessionSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discussion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conclusions: Option<StructuredArtifact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explorations: Option<StructuredArtifact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub perspectives: Option<StructuredArtifact>,
}

impl SessionDetail {
    /// Assembles a detail record. Status and topic come from `conclusions`,
    /// the same way [`SessionSummary::derive`] computes them.
    pub fn assemble(
        folder_name: &str,
        identity: &SessionIdentity,
        discussion: Option<String>,
        conclusions: Option<StructuredArtifact>,
        explorations: Option<StructuredArtifact>,
        perspectives: Option<StructuredArtifact>,
    ) -> Self {
        let summary = SessionSummary::derive(folder_name, identity, conclusions.as_ref());
        Self {
            summary,
            discussion,
            conclusions,
            explorations,
            perspectives,
        }
    }

    pub fn id(&self) -> &str {
        &self.summary.id
    }

    pub fn status(&self) -> SessionStatus {
        self.summary.status
    }
}

/// Orders summaries most recent first; same-date sessions by folder name, descending.
pub fn sort_summaries(summaries: &mut [SessionSummary]) {
    summaries.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
}
