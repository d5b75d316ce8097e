//! Rendering of the typed style declaration into the document the external
//! style tool consumes.

use anyhow::Context;
use moneta::domain::style::StyleConfig;
use moneta::kernel::style::tailwind_document;
use std::fs;
use std::path::Path;

/// Renders the declaration as a pretty-printed JSON document.
///
/// # Errors
/// Returns an error if serialization fails (it cannot for well-formed input,
/// but the fallibility is kept explicit).
pub fn render_document(style: &StyleConfig) -> anyhow::Result<String> {
    let document = tailwind_document(style);
    let mut rendered =
        serde_json::to_string_pretty(&document).context("Failed to render style document")?;
    rendered.push('\n');
    Ok(rendered)
}

/// Writes the rendered document to `path`.
///
/// # Errors
/// Returns an error if rendering or the filesystem write fails.
pub fn write_document(style: &StyleConfig, path: &Path) -> anyhow::Result<()> {
    let rendered = render_document(style)?;
    fs::write(path, rendered)
        .with_context(|| format!("Failed to write style document to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rendered_document_is_stable_json() {
        let first = render_document(&StyleConfig::standard()).unwrap();
        let second = render_document(&StyleConfig::standard()).unwrap();
        assert_eq!(first, second);
        assert!(first.contains("\"#9f7aea\""));
        assert!(first.ends_with('\n'));
    }

    #[test]
    fn written_document_round_trips_as_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tailwind.config.json");
        write_document(&StyleConfig::standard(), &path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["theme"]["extend"]["colors"]["purple"]["600"], "#6b46c1");
        assert_eq!(value["plugins"][0], "@tailwindcss/forms");
    }
}
