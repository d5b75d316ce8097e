//! Design tokens and scan-target declarations consumed by the external
//! style-generation pipeline.
//!
//! Everything here is build-time data: declared once, merged additively into
//! the style tool's own token set, and never shipped to the running
//! application.

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Validation failure while declaring style-configuration data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleDataError {
    /// Color is not a `#`-prefixed 6-digit hex string.
    InvalidHexColor(String),
    /// A shade index was declared twice within one palette family.
    DuplicateShade { family: String, shade: u16 },
    /// A content glob set must contain at least one pattern.
    EmptyGlobSet,
    /// Glob patterns must be non-empty.
    EmptyPattern,
    /// Plugin references must be non-empty module identifiers.
    EmptyPluginRef,
}

impl fmt::Display for StyleDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHexColor(value) => {
                write!(f, "invalid hex color '{value}': expected '#' followed by 6 hex digits")
            },
            Self::DuplicateShade { family, shade } => {
                write!(f, "shade {shade} declared twice in palette family '{family}'")
            },
            Self::EmptyGlobSet => write!(f, "content glob set must not be empty"),
            Self::EmptyPattern => write!(f, "content glob patterns must not be empty"),
            Self::EmptyPluginRef => write!(f, "plugin references must not be empty"),
        }
    }
}

impl std::error::Error for StyleDataError {}

/// A 6-digit hexadecimal color, `#`-prefixed (e.g. `#9f7aea`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct HexColor(String);

impl HexColor {
    /// Validates and wraps a color literal.
    ///
    /// # Errors
    /// Returns [`StyleDataError::InvalidHexColor`] unless the value is `#`
    /// followed by exactly six ASCII hex digits.
    pub fn new(value: impl Into<String>) -> Result<Self, StyleDataError> {
        let value = value.into();
        let valid = value.strip_prefix('#')
            .is_some_and(|hex| hex.len() == 6 && hex.bytes().all(|b| b.is_ascii_hexdigit()));
        if valid { Ok(Self(value)) } else { Err(StyleDataError::InvalidHexColor(value)) }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// Additional design tokens merged into the style tool's base palette.
///
/// Mapping of palette family name to shade index to color. Shades are unique
/// within a family and iteration order is deterministic. The extension is
/// additive only; whether a declared family shadows a base token is the
/// consuming tool's merge policy, this side merely never re-declares its own
/// keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeExtension {
    families: BTreeMap<String, BTreeMap<u16, HexColor>>,
}

impl ThemeExtension {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares one shade of a palette family.
    ///
    /// # Errors
    /// Returns [`StyleDataError::DuplicateShade`] if the `(family, shade)`
    /// pair was already declared.
    pub fn declare(
        &mut self,
        family: impl Into<String>,
        shade: u16,
        color: HexColor,
    ) -> Result<(), StyleDataError> {
        let family = family.into();
        let shades = self.families.entry(family.clone()).or_default();
        if shades.contains_key(&shade) {
            return Err(StyleDataError::DuplicateShade { family, shade });
        }
        shades.insert(shade, color);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, family: &str, shade: u16) -> Option<&HexColor> {
        self.families.get(family).and_then(|shades| shades.get(&shade))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    /// Families in deterministic (sorted) order.
    pub fn families(&self) -> impl Iterator<Item = (&str, &BTreeMap<u16, HexColor>)> {
        self.families.iter().map(|(name, shades)| (name.as_str(), shades))
    }
}

impl Serialize for ThemeExtension {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Shade keys serialize as strings ("400"), matching the consuming
        // tool's document shape.
        serializer.collect_map(self.families.iter().map(|(family, shades)| {
            let shades: BTreeMap<String, &HexColor> =
                shades.iter().map(|(shade, color)| (shade.to_string(), color)).collect();
            (family, shades)
        }))
    }
}

/// Ordered set of file-path patterns the style tool scans for class usage.
///
/// Order does not affect correctness, only scan performance. An omitted
/// pattern silently excludes matching files from the generated stylesheet,
/// so construction rejects empty sets outright.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ContentGlobSet(Vec<String>);

impl ContentGlobSet {
    /// Builds a glob set from an ordered list of patterns.
    ///
    /// # Errors
    /// Returns [`StyleDataError::EmptyGlobSet`] for an empty list and
    /// [`StyleDataError::EmptyPattern`] for any empty pattern. Syntactic
    /// glob validity is checked by the kernel, not here.
    pub fn new<I, S>(patterns: I) -> Result<Self, StyleDataError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let patterns: Vec<String> = patterns.into_iter().map(Into::into).collect();
        if patterns.is_empty() {
            return Err(StyleDataError::EmptyGlobSet);
        }
        if patterns.iter().any(String::is_empty) {
            return Err(StyleDataError::EmptyPattern);
        }
        Ok(Self(patterns))
    }

    #[must_use]
    pub fn patterns(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Reference to an external style-tool plugin module.
///
/// Plugins load in declaration order; overlap resolution between plugins is
/// the consuming tool's policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PluginRef(String);

impl PluginRef {
    /// Wraps a plugin module identifier.
    ///
    /// # Errors
    /// Returns [`StyleDataError::EmptyPluginRef`] for an empty identifier.
    pub fn new(module: impl Into<String>) -> Result<Self, StyleDataError> {
        let module = module.into();
        if module.is_empty() {
            return Err(StyleDataError::EmptyPluginRef);
        }
        Ok(Self(module))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The full declaration handed to the style-generation pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleConfig {
    content: ContentGlobSet,
    theme: ThemeExtension,
    plugins: Vec<PluginRef>,
}

impl StyleConfig {
    /// Assembles a declaration from already-validated parts.
    #[must_use]
    pub fn new(content: ContentGlobSet, theme: ThemeExtension, plugins: Vec<PluginRef>) -> Self {
        Self { content, theme, plugins }
    }

    /// The standard Moneta declaration: entry HTML plus the source tree,
    /// the purple accent shades, and the forms plugin.
    #[must_use]
    pub fn standard() -> Self {
        let content = ContentGlobSet(vec![
            "./index.html".to_owned(),
            "./src/**/*.rs".to_owned(),
            "./src/**/*.html".to_owned(),
            "./src/**/*.css".to_owned(),
        ]);

        let mut families = BTreeMap::new();
        families.insert(
            "purple".to_owned(),
            BTreeMap::from([
                (400, HexColor("#9f7aea".to_owned())),
                (600, HexColor("#6b46c1".to_owned())),
            ]),
        );

        Self {
            content,
            theme: ThemeExtension { families },
            plugins: vec![PluginRef("@tailwindcss/forms".to_owned())],
        }
    }

    /// Patterns the style tool must scan, in declaration order.
    #[must_use]
    pub const fn content_globs(&self) -> &ContentGlobSet {
        &self.content
    }

    /// Tokens merged additively into the base palette.
    #[must_use]
    pub const fn theme_extensions(&self) -> &ThemeExtension {
        &self.theme
    }

    /// Plugin modules, in load order.
    #[must_use]
    pub fn plugins(&self) -> &[PluginRef] {
        &self.plugins
    }
}
