//! Process-wide defaults shared by the launcher, the kernel, and the tooling.

/// Fallback backend address when no override is supplied.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5005";

/// Environment variable carrying the explicit backend override.
pub const BASE_URL_ENV: &str = "MONETA_API_URL";

/// Prefix for layered configuration overrides (`MONETA__WINDOW__TITLE`, ...).
pub const ENV_PREFIX: &str = "MONETA";

/// Root element id the UI tree is attached to inside the index document.
pub const DEFAULT_MOUNT_ID: &str = "main";

/// Default output path for the generated style-pipeline document.
pub const STYLE_DOCUMENT_PATH: &str = "tailwind.config.json";
