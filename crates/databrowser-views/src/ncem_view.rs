//! Viewer for microscopy containers, rendered through a [`FrameReader`].

use std::path::Path;

use databrowser_abi::{FrameReader, ImageSurface, LoadFailure, ViewPlugin};

use crate::ext_matches;

const EXTENSIONS: &[&str] = &["dm3", "dm4", "mrc", "ali", "rec", "emd"];

/// Displays the primary frame of a microscopy file.
pub struct NcemView<R: FrameReader, S: ImageSurface> {
    reader: R,
    surface: S,
}

impl<R: FrameReader, S: ImageSurface> NcemView<R, S> {
    pub fn new(reader: R, surface: S) -> Self {
        Self { reader, surface }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

impl<R: FrameReader, S: ImageSurface> ViewPlugin for NcemView<R, S> {
    fn name(&self) -> &str {
        "ncem_view"
    }

    fn supports(&self, path: &Path) -> bool {
        ext_matches(path, EXTENSIONS)
    }

    fn display(&mut self, path: &Path) -> Result<(), LoadFailure> {
        match self.reader.read_frame(path) {
            Ok(frame) => {
                self.surface.show_frame(frame);
                Ok(())
            }
            Err(err) => {
                log::warn!("frame read failed for {}: {err}", path.display());
                self.surface.clear();
                Err(LoadFailure::new(path, err.to_string()))
            }
        }
    }
}
