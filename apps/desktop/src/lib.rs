//! Desktop shell: the one-time mount of the UI tree into the webview.
//!
//! The launcher is deliberately hard to misuse: it cannot be built without
//! an already-constructed [`ApiClient`], so the backend endpoint is always
//! resolved before anything can render. Mounting happens once; the launcher
//! consumes itself and a missing mount target aborts startup.

use dioxus::desktop::{Config, WindowBuilder};
use dioxus::prelude::*;
use moneta::domain::config::WindowConfig;
use moneta::domain::constants::DEFAULT_MOUNT_ID;
use moneta::kernel::client::ApiClient;

/// Fatal launcher failures. There is no retry and no fallback target.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("mount target id must be non-empty")]
    EmptyMountTarget,

    #[error("mount target '#{id}' not found in the index document")]
    MountTargetMissing { id: String },
}

/// The element the UI tree attaches to inside the index document.
#[derive(Debug, Clone)]
pub struct MountPoint {
    id: String,
}

impl Default for MountPoint {
    fn default() -> Self {
        Self { id: DEFAULT_MOUNT_ID.to_owned() }
    }
}

impl MountPoint {
    /// A mount point with a custom element id.
    ///
    /// # Errors
    /// Returns [`ShellError::EmptyMountTarget`] for an empty id.
    pub fn new(id: impl Into<String>) -> Result<Self, ShellError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ShellError::EmptyMountTarget);
        }
        Ok(Self { id })
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Checks that the index document contains the target element.
    ///
    /// # Errors
    /// Returns [`ShellError::MountTargetMissing`] when no element carries
    /// the id; the caller treats this as a fatal startup error.
    pub fn locate(&self, index: &str) -> Result<(), ShellError> {
        let needle = format!("id=\"{}\"", self.id);
        if index.contains(&needle) {
            Ok(())
        } else {
            Err(ShellError::MountTargetMissing { id: self.id.clone() })
        }
    }
}

/// Builds the webview index document hosting the mount target.
#[must_use]
pub fn index_document(title: &str, mount_id: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>{title}</title>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <link rel="stylesheet" href="assets/main.css">
</head>
<body>
    <div id="{mount_id}"></div>
</body>
</html>"#
    )
}

/// The entry point for launching the app window.
#[derive(Debug)]
pub struct Shell {
    window: WindowConfig,
    mount: MountPoint,
    index: String,
    client: ApiClient,
}

impl Shell {
    /// Prepares a launcher around an already-configured API client.
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        let window = WindowConfig::default();
        let mount = MountPoint::default();
        let index = index_document(&window.title, mount.id());
        Self { window, mount, index, client }
    }

    #[must_use = "This function does nothing unless you call `launch()` on it"]
    pub fn with_window(mut self, window: WindowConfig) -> Self {
        self.index = index_document(&window.title, self.mount.id());
        self.window = window;
        self
    }

    #[must_use = "This function does nothing unless you call `launch()` on it"]
    pub fn with_mount(mut self, mount: MountPoint) -> Self {
        self.index = index_document(&self.window.title, mount.id());
        self.mount = mount;
        self
    }

    /// Replaces the generated index document verbatim.
    #[must_use = "This function does nothing unless you call `launch()` on it"]
    pub fn with_index(mut self, index: impl Into<String>) -> Self {
        self.index = index.into();
        self
    }

    /// Startup checks performed before the webview is created.
    ///
    /// # Errors
    /// Returns [`ShellError::MountTargetMissing`] when the index document
    /// has no element with the mount id.
    pub fn validate(&self) -> Result<(), ShellError> {
        self.mount.locate(&self.index)
    }

    /// Mounts `root` and hands control to the UI runtime.
    ///
    /// Single invocation per process lifetime; the launcher consumes
    /// itself and the API client travels into the component tree through
    /// the context provider.
    ///
    /// # Errors
    /// Returns [`ShellError::MountTargetMissing`] before any window is
    /// created when the mount target is absent.
    pub fn launch(self, root: fn() -> Element) -> Result<(), ShellError> {
        self.validate()?;

        let window = WindowBuilder::new().with_title(&self.window.title).with_inner_size(
            dioxus::desktop::LogicalSize { width: self.window.width, height: self.window.height },
        );

        let cfg = Config::default().with_window(window).with_custom_index(self.index);

        let client = self.client;
        LaunchBuilder::desktop()
            .with_cfg(cfg)
            .with_context_provider(move || Box::new(client.clone()))
            .launch(root);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moneta::domain::config::EndpointConfig;

    fn client() -> ApiClient {
        ApiClient::new(&EndpointConfig::default()).expect("client build")
    }

    #[test]
    fn default_index_contains_the_mount_target() {
        let shell = Shell::new(client());
        shell.validate().expect("generated index must carry the mount div");
    }

    #[test]
    fn missing_mount_target_is_fatal() {
        // The client exists before validation runs, so the
        // configure-before-mount ordering holds even on the failure path.
        let shell = Shell::new(client()).with_index("<html><body></body></html>");
        let err = shell.validate().unwrap_err();
        assert!(matches!(err, ShellError::MountTargetMissing { ref id } if id == "main"));
    }

    #[test]
    fn custom_mount_id_is_respected() {
        let mount = MountPoint::new("app").expect("valid id");
        let shell = Shell::new(client()).with_mount(mount);
        shell.validate().expect("regenerated index must carry the custom id");
    }

    #[test]
    fn empty_mount_id_is_rejected() {
        assert!(matches!(MountPoint::new(""), Err(ShellError::EmptyMountTarget)));
    }
}
