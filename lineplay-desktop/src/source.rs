use std::fs;
use std::path::Path;
use anyhow::{Context, Result};

/// Reads a plain-text document; every line is one paragraph.
pub fn read_paragraphs(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read script: {:?}", path))?;
    let paragraphs = split_paragraphs(&content);
    log::debug!("Loaded {:?}: {} bytes, {} paragraphs", path, content.len(), paragraphs.len());
    Ok(paragraphs)
}

pub fn split_paragraphs(content: &str) -> Vec<String> {
    content
        .strip_prefix('\u{feff}')
        .unwrap_or(content)
        .lines()
        .map(|l| l.trim_end_matches('\r').to_string())
        .collect()
}
