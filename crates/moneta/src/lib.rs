//! Facade crate for Moneta shared modules.
//! Re-exports domain/kernel primitives so applications and tooling depend on
//! one entry point. Keep this crate thin: it should compose other crates,
//! not implement logic.

pub use moneta_domain as domain;
pub use moneta_kernel as kernel;

/// Feature registry for runtime introspection.
pub mod features {
    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "client")]
        "client",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}
