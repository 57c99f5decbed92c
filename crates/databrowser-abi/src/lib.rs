//! DataBrowser ABI crate: stable contracts shared by the browser core and view plugins.

pub mod metadata;
pub mod reader;
pub mod surface;
pub mod view;

pub use metadata::*;
pub use reader::*;
pub use surface::*;
pub use view::*;
