//! The boundary the GUI shell calls into.
//!
//! The shell owns window chrome, the filesystem tree and settings; this
//! router owns which view is active and pushes files at it. Everything runs
//! on the shell's one control thread.

use std::path::{Path, PathBuf};

use crate::errors::{BrowseError, RouteError};
use crate::registry::{ViewRegistry, ViewSelect};

/// Active-view state on top of a [`ViewRegistry`].
pub struct FileRouter {
    registry: ViewRegistry,
    auto_select: bool,
    current_view: Option<String>,
    current_file: Option<PathBuf>,
}

impl FileRouter {
    /// Wrap a fully-populated registry. Automatic selection starts off,
    /// matching the shell's default.
    pub fn new(registry: ViewRegistry) -> Self {
        Self {
            registry,
            auto_select: false,
            current_view: None,
            current_file: None,
        }
    }

    pub fn set_auto_select(&mut self, on: bool) {
        self.auto_select = on;
    }

    pub fn current_view(&self) -> Option<&str> {
        self.current_view.as_deref()
    }

    pub fn registry(&self) -> &ViewRegistry {
        &self.registry
    }

    /// The shell selected a new active file.
    ///
    /// Resolves a view (the current one when automatic selection is off,
    /// otherwise by extension), records it as current, and asks it to
    /// display the file. Returns the resolved view name so the shell can
    /// sync its selector. Load failures propagate after the view has reset
    /// its own surface.
    pub fn on_file_selected(&mut self, path: &Path) -> Result<String, BrowseError> {
        self.current_file = Some(path.to_path_buf());

        // With no current view yet there is nothing to hold on to; resolve
        // automatically rather than failing on a half-initialized shell.
        let mode = match (self.auto_select, &self.current_view) {
            (false, Some(name)) => ViewSelect::Manual(name.as_str()),
            _ => ViewSelect::Auto,
        };
        let name = self.registry.select_for(path, mode)?.to_string();
        log::debug!("routing {} to view {name:?}", path.display());

        self.current_view = Some(name.clone());
        self.display_on(&name, path)?;
        Ok(name)
    }

    /// The user picked a view by name. Re-displays the active file, if any.
    pub fn set_current_view(&mut self, name: &str) -> Result<(), BrowseError> {
        if !self.registry.contains(name) {
            return Err(RouteError::UnknownViewName(name.to_string()).into());
        }
        self.current_view = Some(name.to_string());

        if let Some(file) = self.current_file.clone() {
            if file.is_file() {
                self.display_on(name, &file)?;
            }
        }
        Ok(())
    }

    fn display_on(&mut self, name: &str, path: &Path) -> Result<(), BrowseError> {
        let view = self
            .registry
            .view_mut(name)
            .ok_or_else(|| RouteError::UnknownViewName(name.to_string()))?;
        view.display(path)?;
        Ok(())
    }
}
