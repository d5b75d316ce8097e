use crate::services::tailwind::write_document;
use anyhow::Context;
use moneta::domain::constants::STYLE_DOCUMENT_PATH;
use moneta::domain::style::StyleConfig;
use moneta::kernel::style::validate;
use std::path::Path;

/// Validates the standard style declaration.
///
/// # Errors
/// Returns an error when a glob pattern is syntactically invalid or the
/// scan set is empty; the same violations the style tool would otherwise
/// report at its own build step.
pub fn check_style() -> anyhow::Result<()> {
    let style = StyleConfig::standard();
    validate(&style).context("Style declaration failed validation")?;

    println!(
        "✅ Style declaration OK ({} globs, {} plugin(s))",
        style.content_globs().len(),
        style.plugins().len()
    );
    Ok(())
}

/// Writes the style-tool document for the external pipeline.
///
/// # Errors
/// Returns an error when validation, rendering, or the filesystem write
/// fails.
pub fn emit_style(output: Option<&Path>) -> anyhow::Result<()> {
    let style = StyleConfig::standard();
    validate(&style).context("Refusing to emit an invalid style declaration")?;

    let path = output.unwrap_or_else(|| Path::new(STYLE_DOCUMENT_PATH));
    write_document(&style, path)?;

    println!("📦 Wrote style document to {}", path.display());
    Ok(())
}
