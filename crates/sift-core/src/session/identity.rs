//! Session identity parsing.
//!
//! A session folder is named `PREFIX-<slug>-<YYYY-MM-DD>`. Anything else in
//! the analysis directory is not a session and is skipped silently.

use crate::config::DEFAULT_SESSION_PREFIX;
use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// The decoded `{slug, date}` pair of a session folder name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionIdentity {
    /// Topic slug, never empty. May itself contain `-`.
    pub slug: String,
    /// Creation date taken from the trailing date token.
    pub date: NaiveDate,
}

impl SessionIdentity {
    /// Human-readable topic derived from the slug (`my-cool-topic` -> `my cool topic`).
    pub fn fallback_topic(&self) -> String {
        self.slug.replace('-', " ")
    }
}

/// Decodes folder names into [`SessionIdentity`] values.
///
/// The slug is matched greedily, so when the slug itself contains a
/// date-shaped substring the final date token is the one that counts:
/// `ANL-retro-2025-12-31-notes-2026-01-02` has slug `retro-2025-12-31-notes`.
#[derive(Debug, Clone)]
pub struct SessionNameParser {
    prefix: String,
    pattern: Regex,
}

impl SessionNameParser {
    /// Creates a parser for folder names starting with `prefix`.
    pub fn new(prefix: &str) -> Self {
        // Slug excludes path separators so an identifier always names a single
        // directory component under the analysis directory.
        let source = format!(
            r"^{}-([^/\\]+)-(\d{{4}}-\d{{2}}-\d{{2}})$",
            regex::escape(prefix)
        );
        let pattern = Regex::new(&source).expect("session name pattern is a valid regex");
        Self {
            prefix: prefix.to_string(),
            pattern,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Parses a folder name.
    ///
    /// # Returns
    ///
    /// - `Some(SessionIdentity)`: the name follows the session convention
    /// - `None`: the name is not a session (including impossible dates such
    ///   as `2026-02-30`)
    pub fn parse(&self, folder_name: &str) -> Option<SessionIdentity> {
        let captures = self.pattern.captures(folder_name)?;
        let slug = captures.get(1)?.as_str();
        let date = NaiveDate::parse_from_str(captures.get(2)?.as_str(), DATE_FORMAT).ok()?;

        Some(SessionIdentity {
            slug: slug.to_string(),
            date,
        })
    }

    /// Returns true if `folder_name` names a session.
    pub fn is_session_name(&self, folder_name: &str) -> bool {
        self.parse(folder_name).is_some()
    }
}

impl Default for SessionNameParser {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_PREFIX)
    }
}
