//! Fault-tolerant artifact access.
//!
//! Artifacts are written by an external process that may still be running,
//! so a read can hit a missing file, a half-written document or a permission
//! race at any time. Every public read collapses those cases to `None`. The
//! reason is kept in a private [`ArtifactFault`] and only logged.

use serde::Deserialize;
use serde_json::Value;
use sift_core::config::LimitsConfig;
use sift_core::session::StructuredArtifact;
use std::io;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncReadExt;

/// Why an artifact read produced nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ArtifactFault {
    Missing,
    PermissionDenied,
    NotAFile,
    TooLarge { size: u64, limit: u64 },
    InvalidUtf8,
    Io(String),
    TooDeep { depth: usize, limit: usize },
    Malformed(String),
    NotAnObject,
}

impl ArtifactFault {
    fn from_io(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::Missing,
            io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            _ => Self::Io(err.to_string()),
        }
    }

    fn log(&self, path: &Path) {
        match self {
            Self::Missing => tracing::trace!("Artifact absent: {}", path.display()),
            Self::Malformed(reason) => {
                tracing::warn!("Ignoring malformed artifact {}: {}", path.display(), reason)
            }
            Self::NotAnObject => tracing::warn!(
                "Ignoring artifact {}: top-level JSON value is not an object",
                path.display()
            ),
            Self::TooLarge { size, limit } => tracing::warn!(
                "Ignoring artifact {}: {} bytes exceeds limit of {} bytes",
                path.display(),
                size,
                limit
            ),
            Self::TooDeep { depth, limit } => tracing::warn!(
                "Ignoring artifact {}: nesting depth {} exceeds limit of {}",
                path.display(),
                depth,
                limit
            ),
            Self::PermissionDenied => {
                tracing::debug!("Artifact not readable: {}", path.display())
            }
            Self::NotAFile => tracing::debug!("Artifact path is not a file: {}", path.display()),
            Self::InvalidUtf8 => {
                tracing::debug!("Artifact is not valid UTF-8: {}", path.display())
            }
            Self::Io(reason) => {
                tracing::debug!("Failed to read artifact {}: {}", path.display(), reason)
            }
        }
    }
}

/// Reads session artifacts without ever failing.
#[derive(Debug, Clone)]
pub struct ArtifactReader {
    max_bytes: u64,
    max_depth: usize,
}

impl ArtifactReader {
    /// Creates a reader that treats files larger than `max_bytes`, or JSON
    /// nested deeper than `max_depth`, as absent.
    pub fn new(max_bytes: u64, max_depth: usize) -> Self {
        Self {
            max_bytes,
            max_depth,
        }
    }

    pub fn from_limits(limits: &LimitsConfig) -> Self {
        Self::new(limits.max_artifact_bytes, limits.max_json_depth)
    }

    /// Reads a text artifact.
    ///
    /// # Returns
    ///
    /// - `Some(String)`: The file contents
    /// - `None`: Missing, unreadable, too large or not valid UTF-8
    pub async fn read_text(&self, path: &Path) -> Option<String> {
        match self.load_text(path).await {
            Ok(text) => Some(text),
            Err(fault) => {
                fault.log(path);
                None
            }
        }
    }

    /// Reads and parses a JSON artifact whose top level is an object.
    ///
    /// # Returns
    ///
    /// - `Some(StructuredArtifact)`: The parsed object
    /// - `None`: Missing, unreadable, too large, too deep, malformed or not an object
    pub async fn read_structured(&self, path: &Path) -> Option<StructuredArtifact> {
        match self.load_structured(path).await {
            Ok(artifact) => Some(artifact),
            Err(fault) => {
                fault.log(path);
                None
            }
        }
    }

    /// Returns true if `path` is a directory, following symlinks.
    pub async fn is_dir(&self, path: &Path) -> bool {
        fs::metadata(path)
            .await
            .map(|metadata| metadata.is_dir())
            .unwrap_or(false)
    }

    async fn load_text(&self, path: &Path) -> Result<String, ArtifactFault> {
        let metadata = fs::metadata(path).await.map_err(ArtifactFault::from_io)?;
        if !metadata.is_file() {
            return Err(ArtifactFault::NotAFile);
        }
        if metadata.len() > self.max_bytes {
            return Err(ArtifactFault::TooLarge {
                size: metadata.len(),
                limit: self.max_bytes,
            });
        }
        // The writer may still be appending; the read itself is bounded too.
        let bytes = read_bounded(path, self.max_bytes).await?;
        String::from_utf8(bytes).map_err(|_| ArtifactFault::InvalidUtf8)
    }

    async fn load_structured(&self, path: &Path) -> Result<StructuredArtifact, ArtifactFault> {
        let text = self.load_text(path).await?;
        parse_object(&text, self.max_depth)
    }
}

impl Default for ArtifactReader {
    fn default() -> Self {
        Self::from_limits(&LimitsConfig::default())
    }
}

/// Reads at most `limit` bytes, failing with `TooLarge` if the file holds more.
async fn read_bounded(path: &Path, limit: u64) -> Result<Vec<u8>, ArtifactFault> {
    let file = fs::File::open(path).await.map_err(ArtifactFault::from_io)?;
    let mut reader = file.take(limit.saturating_add(1));
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .await
        .map_err(ArtifactFault::from_io)?;

    let size = bytes.len() as u64;
    if size > limit {
        return Err(ArtifactFault::TooLarge { size, limit });
    }
    Ok(bytes)
}

/// Parses a JSON object of any nesting up to `max_depth`.
///
/// serde_json's own recursion limit is lifted; `serde_stacker` grows the
/// stack on demand so deep documents parse on any thread.
fn parse_object(text: &str, max_depth: usize) -> Result<StructuredArtifact, ArtifactFault> {
    let depth = nesting_depth(text);
    if depth > max_depth {
        return Err(ArtifactFault::TooDeep {
            depth,
            limit: max_depth,
        });
    }

    let mut deserializer = serde_json::Deserializer::from_str(text);
    deserializer.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut deserializer))
        .map_err(|e| ArtifactFault::Malformed(e.to_string()))?;
    deserializer
        .end()
        .map_err(|e| ArtifactFault::Malformed(e.to_string()))?;

    match value {
        Value::Object(artifact) => Ok(artifact),
        _ => Err(ArtifactFault::NotAnObject),
    }
}

/// Deepest array/object nesting in `text`, ignoring brackets inside strings.
fn nesting_depth(text: &str) -> usize {
    let mut depth = 0usize;
    let mut deepest = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for byte in text.bytes() {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b'[' | b'{' => {
                depth += 1;
                deepest = deepest.max(depth);
            }
            b']' | b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    deepest
}
