//! Routing policy: which registered view handles a given file.

use std::path::Path;

use crate::errors::RouteError;

use super::ViewRegistry;

/// How the active view is chosen for a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewSelect<'a> {
    /// Infer the view from the file, preferring the most recently
    /// registered one that claims support.
    Auto,
    /// The user explicitly named the view.
    Manual(&'a str),
}

impl ViewRegistry {
    /// Resolve a view name for `path`.
    ///
    /// `Manual` is an exact lookup; an unknown name is an error. `Auto`
    /// scans views in reverse registration order and takes the first whose
    /// `supports` says yes; when none match it resolves to the designated
    /// fallback view, so it cannot fail once a fallback is registered.
    pub fn select_for(&self, path: &Path, mode: ViewSelect<'_>) -> Result<&str, RouteError> {
        match mode {
            ViewSelect::Manual(name) => self
                .views
                .get_key_value(name)
                .map(|(k, _)| k.as_str())
                .ok_or_else(|| RouteError::UnknownViewName(name.to_string())),
            ViewSelect::Auto => {
                for (name, view) in self.views.iter().rev() {
                    if view.supports(path) {
                        return Ok(name);
                    }
                }
                self.fallback.as_deref().ok_or(RouteError::NoFallback)
            }
        }
    }
}
