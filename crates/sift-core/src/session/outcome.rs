//! Three-way result envelope for collaborators.

use crate::error::Result;
use serde::Serialize;

/// The outcome of a session query as a collaborator sees it.
///
/// An empty list is a `Found` with no entries, never a failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SessionQuery<T> {
    Found { data: T },
    NotFound { id: String },
    Failed { message: String },
}

impl<T> SessionQuery<T> {
    /// Wraps the result of a list operation.
    pub fn from_list(result: Result<T>) -> Self {
        match result {
            Ok(data) => Self::Found { data },
            Err(e) => Self::Failed {
                message: e.to_string(),
            },
        }
    }

    /// Wraps the result of a lookup by identifier.
    pub fn from_lookup(id: &str, result: Result<Option<T>>) -> Self {
        match result {
            Ok(Some(data)) => Self::Found { data },
            Ok(None) => Self::NotFound { id: id.to_string() },
            Err(e) => Self::Failed {
                message: e.to_string(),
            },
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SiftError;

    #[test]
    fn test_lookup_none_is_not_found() {
        let outcome: SessionQuery<u32> = SessionQuery::from_lookup("ANL-x-2026-01-01", Ok(None));
        assert_eq!(
            outcome,
            SessionQuery::NotFound {
                id: "ANL-x-2026-01-01".to_string()
            }
        );
    }

    #[test]
    fn test_lookup_error_is_failed() {
        let outcome: SessionQuery<u32> =
            SessionQuery::from_lookup("id", Err(SiftError::internal("boom")));
        assert_eq!(
            outcome,
            SessionQuery::Failed {
                message: "Internal error: boom".to_string()
            }
        );
    }

    #[test]
    fn test_empty_list_is_found() {
        let outcome: SessionQuery<Vec<u32>> = SessionQuery::from_list(Ok(vec![]));
        assert!(outcome.is_found());
        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["outcome"], "found");
        assert_eq!(value["data"], serde_json::json!([]));
    }
}
