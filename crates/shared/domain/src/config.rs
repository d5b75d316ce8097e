use crate::constants::DEFAULT_BASE_URL;
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level application configuration shared across the shell and tooling.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfigInner {
    pub window: WindowConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(flatten, default)]
    inner: Arc<AppConfigInner>,
}

impl Deref for AppConfig {
    type Target = AppConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for AppConfig {
    fn deref_mut(&mut self) -> &mut AppConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Webview window configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

/// Log level and optional rolling-file destination.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub path: Option<PathBuf>,
}

/// Which precedence tier produced the resolved backend address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointSource {
    /// An explicit, non-empty environment override.
    Override,
    /// The built-in loopback fallback.
    Fallback,
}

/// The backend address the API client is constructed around.
///
/// Resolved exactly once at startup and immutable afterwards; changing the
/// backend requires a restart. The value is taken verbatim from the override
/// when one is present—no trimming and no well-formedness check. A malformed
/// address surfaces as a request-level error in the API client, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    base_url: String,
    source: EndpointSource,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_owned(), source: EndpointSource::Fallback }
    }
}

impl EndpointConfig {
    /// Resolves the backend address from an optional override.
    ///
    /// Strict two-tier precedence: a present and non-empty override wins
    /// unconditionally; unset and empty string both fall back to
    /// [`DEFAULT_BASE_URL`]. The two absent cases are matched explicitly
    /// rather than coerced through emptiness of a joined default.
    #[must_use]
    pub fn from_override(value: Option<&str>) -> Self {
        match value {
            Some(url) if !url.is_empty() => {
                Self { base_url: url.to_owned(), source: EndpointSource::Override }
            },
            Some(_) | None => Self::default(),
        }
    }

    /// The resolved backend address.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Which precedence tier produced the value.
    #[must_use]
    pub const fn source(&self) -> EndpointSource {
        self.source
    }

    /// Whether an explicit override won the resolution.
    #[must_use]
    pub const fn is_override(&self) -> bool {
        matches!(self.source, EndpointSource::Override)
    }
}

// --- Default ---

impl Default for WindowConfig {
    fn default() -> Self {
        Self { title: "Moneta".to_owned(), width: 1200.0, height: 800.0 }
    }
}
