//! Kernel utilities shared across the shell and the tooling.
//! Keep this crate lightweight; it covers config loading, the injected API
//! client, and the style-pipeline services.
//!
//! ## Config loading
//! ```rust,ignore
//! use moneta_kernel::config::load_config;
//! let cfg: moneta_domain::config::AppConfig = load_config(Some("client")).unwrap();
//! ```
//!
//! ## Endpoint resolution
//! ```rust
//! let endpoint = moneta_kernel::config::resolve_endpoint();
//! assert!(!endpoint.base_url().is_empty());
//! ```

pub mod client;
pub mod config;
pub mod style;

pub use moneta_domain as domain;
