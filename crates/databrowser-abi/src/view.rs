//! The view-plugin capability implemented by each concrete viewer.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// A load/render failure surfaced to the shell as a status message.
///
/// By the time this is returned the plugin has already reset its display
/// surface to the safe default (see [`crate::surface`]).
#[derive(Debug, Error)]
#[error("failed to load {}: {}", .path.display(), .message)]
pub struct LoadFailure {
    pub path: PathBuf,
    pub message: String,
}

impl LoadFailure {
    pub fn new(path: &Path, message: impl Into<String>) -> Self {
        LoadFailure {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }
}

/// A named display capability the browser can route files to.
///
/// Identity is the name; the registry enforces uniqueness. Plugins are
/// created once at startup and live for the process lifetime.
pub trait ViewPlugin {
    /// Unique registry name, also shown in the view selector.
    fn name(&self) -> &str;

    /// Whether this view would likely be able to read the given file.
    ///
    /// Called while the user navigates the filesystem tree, so this must be
    /// cheap: extension checks only, no file I/O, never an error.
    fn supports(&self, path: &Path) -> bool;

    /// Load the file and render it into the owned surface.
    ///
    /// On failure the implementation must clear its surface to the safe
    /// default before returning the error.
    fn display(&mut self, path: &Path) -> Result<(), LoadFailure>;
}
