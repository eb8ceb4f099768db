use super::format;
use anyhow::{Context, Result};
use sift_core::render::render;
use std::fs;
use std::path::Path;

/// Renders any JSON document the same way session artifacts are rendered.
pub fn run(file: &Path) -> Result<()> {
    let content =
        fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))?;
    let value: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {} as JSON", file.display()))?;

    print!("{}", format::tree(&render(&value)));
    Ok(())
}
