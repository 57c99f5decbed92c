//! The bundled view plugins.
//!
//! Each view owns one display surface and implements
//! [`databrowser_abi::ViewPlugin`]. The shell registers them in priority
//! order (lowest first) and routes files through
//! [`databrowser_core::FileRouter`].

use std::path::Path;

mod file_info;
mod image_view;
mod metadata_view;
mod ncem_view;
mod surfaces;

pub use file_info::FileInfoView;
pub use image_view::ImageioView;
pub use metadata_view::MetadataInfoView;
pub use ncem_view::NcemView;
pub use surfaces::{FrameBuffer, TextPane};

/// Case-insensitive extension check shared by the `supports` impls.
pub(crate) fn ext_matches(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| extensions.iter().any(|x| e.eq_ignore_ascii_case(x)))
        .unwrap_or(false)
}
