//! Services around the declarative style configuration: syntactic validation
//! and the mapping onto the document shape the external style tool consumes.

use glob::Pattern;
use moneta_domain::style::StyleConfig;
use serde_json::{Value, json};

/// Violations the external style tool would otherwise only report at its own
/// build step; caught here at workspace-tool time instead.
#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    #[error("style declaration has no content globs; nothing would be scanned")]
    NoContent,

    #[error("invalid content glob '{pattern}': {source}")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

/// Checks the declaration against what the style tool will accept.
///
/// # Errors
/// [`StyleError::NoContent`] for an empty scan set (which would silently
/// generate an empty stylesheet) and [`StyleError::InvalidGlob`] for a
/// pattern that does not parse as glob syntax.
pub fn validate(style: &StyleConfig) -> Result<(), StyleError> {
    let patterns = style.content_globs().patterns();
    if patterns.is_empty() {
        return Err(StyleError::NoContent);
    }

    for pattern in patterns {
        Pattern::new(pattern)
            .map_err(|source| StyleError::InvalidGlob { pattern: pattern.clone(), source })?;
    }

    Ok(())
}

/// Maps the typed declaration onto the Tailwind document shape:
/// `{ content, theme: { extend: { colors } }, plugins }`.
///
/// Theme tokens land under `extend`, so the tool merges them additively
/// into its base palette instead of replacing it.
#[must_use]
pub fn tailwind_document(style: &StyleConfig) -> Value {
    json!({
        "content": style.content_globs(),
        "theme": {
            "extend": {
                "colors": style.theme_extensions(),
            },
        },
        "plugins": style.plugins(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use moneta_domain::style::{ContentGlobSet, ThemeExtension};

    #[test]
    fn standard_declaration_validates() {
        validate(&StyleConfig::standard()).expect("standard declaration must be valid");
    }

    #[test]
    fn broken_glob_is_rejected() {
        // The domain type guards emptiness but not glob syntax; an unclosed
        // character class has to hit the parser here.
        let broken = ContentGlobSet::new(["./src/**/*.[rs"]).unwrap();
        let style =
            StyleConfig::new(broken, ThemeExtension::new(), vec![]);
        assert!(matches!(
            validate(&style),
            Err(StyleError::InvalidGlob { ref pattern, .. }) if pattern == "./src/**/*.[rs"
        ));
    }

    #[test]
    fn empty_scan_set_is_rejected() {
        // An empty set is only reachable through Default; new() refuses it.
        let style = StyleConfig::new(ContentGlobSet::default(), ThemeExtension::new(), vec![]);
        assert!(matches!(validate(&style), Err(StyleError::NoContent)));
    }

    #[test]
    fn document_has_the_tailwind_shape() {
        let doc = tailwind_document(&StyleConfig::standard());
        assert_eq!(
            doc,
            json!({
                "content": ["./index.html", "./src/**/*.rs", "./src/**/*.html", "./src/**/*.css"],
                "theme": {
                    "extend": {
                        "colors": { "purple": { "400": "#9f7aea", "600": "#6b46c1" } },
                    },
                },
                "plugins": ["@tailwindcss/forms"],
            })
        );
    }
}
