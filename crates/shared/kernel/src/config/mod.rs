use config::{Config, Environment, File};
use moneta_domain::config::EndpointConfig;
use moneta_domain::constants::{BASE_URL_ENV, ENV_PREFIX};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::info;

/// Custom error type for config loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to assemble configuration sources: {0}")]
    Build(#[source] config::ConfigError),
    #[error("configuration does not match the expected shape: {0}")]
    Deserialize(#[source] config::ConfigError),
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// This function implements a layered configuration strategy:
/// 1. **Base File**: Loads settings from an optional file (e.g., `client.toml`). If no path is
///    provided, it defaults to `"client"`. A missing file is not an error; the serde defaults
///    of the target structure apply.
/// 2. **Environment Overrides**: Overlays values from environment variables prefixed with
///    `MONETA__`. Nested structures are accessed using double underscores
///    (e.g., `MONETA__WINDOW__TITLE` maps to `window.title`).
///
/// The backend address is deliberately *not* part of this layering; it has its own two-tier
/// rule in [`resolve_endpoint`].
///
/// # Errors
/// Returns [`ConfigError`] if the environment overlay is malformed or the merged values do
/// not deserialize into `T`.
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path = path.map_or_else(|| PathBuf::from("client"), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .convert_case(config::Case::Snake),
        );

    info!("Loading config from {}", effective_path.display());

    builder
        .build()
        .map_err(ConfigError::Build)?
        .try_deserialize::<T>()
        .map_err(ConfigError::Deserialize)
}

/// Resolves the backend address from the process environment.
///
/// Strict two-tier precedence: a present and non-empty `MONETA_API_URL`
/// wins verbatim, otherwise the loopback fallback applies. Runs once at
/// startup, before the API client is constructed; the result is immutable
/// for the life of the process.
#[must_use]
pub fn resolve_endpoint() -> EndpointConfig {
    let raw = std::env::var(BASE_URL_ENV).ok();
    let endpoint = EndpointConfig::from_override(raw.as_deref());

    info!(
        base_url = endpoint.base_url(),
        explicit_override = endpoint.is_override(),
        "Resolved backend endpoint"
    );

    endpoint
}
