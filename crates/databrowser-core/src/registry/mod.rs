//! Ordered view registry + file-routing policy.
//!
//! Design:
//! - `ViewRegistry` lives in this parent module so the child module can
//!   reach its private fields without making them pub(crate).
//! - `select.rs` implements the routing policy (`ViewSelect`, `select_for`).
//! - There is no global registry: the controller owns the instance and hands
//!   it to whoever needs it.

use indexmap::IndexMap;

use databrowser_abi::ViewPlugin;

mod select;
pub use select::ViewSelect;

/// Ordered collection of view plugins, keyed by name.
///
/// Registration order is the routing priority: automatic selection scans in
/// reverse, so the most recently registered matching view wins. That order,
/// plus one designated fallback, is the whole priority mechanism.
pub struct ViewRegistry {
    views: IndexMap<String, Box<dyn ViewPlugin>>,
    fallback: Option<String>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self {
            views: IndexMap::new(),
            fallback: None,
        }
    }

    /// Insert or replace a view under its name. A replaced name keeps its
    /// original position in [`ViewRegistry::list_names`]. Always succeeds.
    pub fn register(&mut self, view: Box<dyn ViewPlugin>) {
        let name = view.name().to_string();
        log::debug!("registering view {name:?}");
        self.views.insert(name, view);
    }

    /// Register a view and designate it as the automatic-selection fallback.
    ///
    /// The fallback is an ordinary registered view: it appears in
    /// [`ViewRegistry::list_names`] and can be selected manually.
    pub fn register_fallback(&mut self, view: Box<dyn ViewPlugin>) {
        let name = view.name().to_string();
        self.register(view);
        self.fallback = Some(name);
    }

    /// Registered names in registration order (the selector's order).
    pub fn list_names(&self) -> Vec<&str> {
        self.views.keys().map(String::as_str).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.views.contains_key(name)
    }

    /// Borrow a view for display.
    pub fn view_mut(&mut self, name: &str) -> Option<&mut (dyn ViewPlugin + 'static)> {
        self.views.get_mut(name).map(Box::as_mut)
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}

impl Default for ViewRegistry {
    fn default() -> Self {
        Self::new()
    }
}
