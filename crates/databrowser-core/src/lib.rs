//! DataBrowser core: view routing, metadata normalization, result caching.
//!
//! Design:
//! - `registry` owns the ordered view collection and the routing policy
//!   (manual lookup, reverse-registration-order automatic selection).
//! - `metadata` turns raw reader dumps into uniform [`MetadataRecord`]s.
//! - `cache` is a bounded memoization of normalization results by path.
//! - `browser` is the boundary the GUI shell calls into; the shell itself
//!   (window chrome, filesystem tree, settings) lives outside this workspace.
//!
//! Everything runs on the one control thread of the shell; no locking.

pub mod browser;
pub mod cache;
pub mod errors;
pub mod metadata;
pub mod registry;
pub mod render;

pub use browser::FileRouter;
pub use cache::ResultCache;
pub use errors::{BrowseError, RouteError};
pub use metadata::FormatKind;
pub use registry::{ViewRegistry, ViewSelect};
pub use render::{render_text, to_json};
