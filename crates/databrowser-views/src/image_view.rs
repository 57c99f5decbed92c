//! Viewer for conventional image formats, decoded with the `image` crate.

use std::path::Path;

use databrowser_abi::{FrameData, ImageSurface, LoadFailure, ViewPlugin};

use crate::ext_matches;

const EXTENSIONS: &[&str] = &["png", "tif", "tiff", "jpg"];

/// Displays conventional images as grayscale frames.
pub struct ImageioView<S: ImageSurface> {
    surface: S,
}

impl<S: ImageSurface> ImageioView<S> {
    pub fn new(surface: S) -> Self {
        Self { surface }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

impl<S: ImageSurface> ViewPlugin for ImageioView<S> {
    fn name(&self) -> &str {
        "imageio_view"
    }

    fn supports(&self, path: &Path) -> bool {
        ext_matches(path, EXTENSIONS)
    }

    fn display(&mut self, path: &Path) -> Result<(), LoadFailure> {
        match load_frame(path) {
            Ok(frame) => {
                self.surface.show_frame(frame);
                Ok(())
            }
            Err(err) => {
                log::warn!("image load failed for {}: {err}", path.display());
                self.surface.clear();
                Err(LoadFailure::new(path, err.to_string()))
            }
        }
    }
}

/// Decode and collapse to a single grayscale f32 frame.
fn load_frame(path: &Path) -> image::ImageResult<FrameData> {
    let img = image::open(path)?;
    let luma = img.to_luma32f();
    let (width, height) = luma.dimensions();
    Ok(FrameData {
        width,
        height,
        data: luma.into_raw(),
    })
}
