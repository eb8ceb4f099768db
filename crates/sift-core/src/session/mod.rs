//! Analysis session domain module.
//!
//! This module contains the session records, the folder-name identity
//! parser and the repository interface the viewer reads sessions through.
//!
//! # Module Structure
//!
//! - `identity`: Folder name decoding (`SessionIdentity`, `SessionNameParser`)
//! - `model`: Session records (`SessionSummary`, `SessionDetail`, `SessionStatus`)
//! - `outcome`: Found / not-found / failed envelope for collaborators
//! - `repository`: Repository trait for session discovery
//!
//! # Usage
//!
//! ```ignore
//! use sift_core::session::{AnalysisSessionRepository, SessionNameParser, SessionSummary};
//! ```

mod identity;
mod model;
mod outcome;
mod repository;

// Re-export public API
pub use identity::{SessionIdentity, SessionNameParser};
pub use model::{
    ConclusionsHeader, SessionDetail, SessionStatus, SessionSummary, StructuredArtifact,
    sort_summaries,
};
pub use outcome::SessionQuery;
pub use repository::AnalysisSessionRepository;
