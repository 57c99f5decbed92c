//! The metadata pane: normalized header fields as `key = value` text.

use std::path::Path;

use databrowser_abi::{
    DmTagReader, LoadFailure, MetadataRecord, MrcHeaderReader, ReadError, TextSurface, ViewPlugin,
};
use databrowser_core::metadata::{normalize_dm, normalize_mrc};
use databrowser_core::{render_text, FormatKind, ResultCache};

use crate::ext_matches;

// .emd is deliberately absent: its metadata layout has no extraction rules
// here, so the image view handles it alone.
const EXTENSIONS: &[&str] = &["dm3", "dm4", "mrc", "ali", "rec"];

/// Displays normalized metadata for the dm and mrc container families.
///
/// Records are memoized per path in a bounded cache, so flipping back to a
/// recently shown file does not re-read it. Failed reads are never cached.
pub struct MetadataInfoView<D: DmTagReader, M: MrcHeaderReader, S: TextSurface> {
    dm: D,
    mrc: M,
    surface: S,
    cache: ResultCache,
}

impl<D: DmTagReader, M: MrcHeaderReader, S: TextSurface> MetadataInfoView<D, M, S> {
    pub fn new(dm: D, mrc: M, surface: S) -> Self {
        Self {
            dm,
            mrc,
            surface,
            cache: ResultCache::default(),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    fn normalized(&mut self, path: &Path) -> Result<MetadataRecord, ReadError> {
        match FormatKind::from_path(path) {
            // nothing to extract; show the file name alone, uncached
            FormatKind::Other => Ok(MetadataRecord::for_file(path)),
            kind => {
                let dm = &self.dm;
                let mrc = &self.mrc;
                self.cache.get_or_compute(path, |p| match kind {
                    FormatKind::DmFamily => Ok(normalize_dm(p, &dm.read_tags(p)?)),
                    _ => Ok(normalize_mrc(p, &mrc.read_header(p)?)),
                })
            }
        }
    }
}

impl<D: DmTagReader, M: MrcHeaderReader, S: TextSurface> ViewPlugin for MetadataInfoView<D, M, S> {
    fn name(&self) -> &str {
        "metadata_info"
    }

    fn supports(&self, path: &Path) -> bool {
        ext_matches(path, EXTENSIONS)
    }

    fn display(&mut self, path: &Path) -> Result<(), LoadFailure> {
        match self.normalized(path) {
            Ok(rec) => {
                self.surface.show_text(&render_text(&rec));
                Ok(())
            }
            Err(err) => {
                log::warn!("metadata read failed for {}: {err}", path.display());
                self.surface.clear();
                Err(LoadFailure::new(path, err.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TextPane;
    use databrowser_abi::{DmTagDump, MetaValue, MrcHeaderDump};
    use indexmap::IndexMap;
    use std::cell::Cell;
    use std::rc::Rc;

    struct StubDm {
        calls: Rc<Cell<usize>>,
    }

    impl DmTagReader for StubDm {
        fn read_tags(&self, _path: &Path) -> Result<DmTagDump, ReadError> {
            self.calls.set(self.calls.get() + 1);
            let mut tags = IndexMap::new();
            tags.insert(
                "ImageList.1.ImageTags.Microscope Info.Voltage".to_string(),
                MetaValue::Float(300000.0),
            );
            Ok(DmTagDump { tags, num_objects: 1 })
        }
    }

    struct StubMrc;

    impl MrcHeaderReader for StubMrc {
        fn read_header(&self, _path: &Path) -> Result<MrcHeaderDump, ReadError> {
            Ok(MrcHeaderDump {
                axis_orientations: [1, 2, 3],
                cell_angles: [90.0, 90.0, 90.0],
                voxel_size: [2.0, 2.0, 2.0],
                vendor_info: None,
            })
        }
    }

    struct BrokenDm;

    impl DmTagReader for BrokenDm {
        fn read_tags(&self, path: &Path) -> Result<DmTagDump, ReadError> {
            Err(ReadError::malformed(path, "truncated tag directory"))
        }
    }

    fn view_with_counter() -> (
        MetadataInfoView<StubDm, StubMrc, TextPane>,
        Rc<Cell<usize>>,
    ) {
        let calls = Rc::new(Cell::new(0));
        let view = MetadataInfoView::new(StubDm { calls: calls.clone() }, StubMrc, TextPane::new());
        (view, calls)
    }

    #[test]
    fn dm_files_render_normalized_text() {
        let (mut view, _) = view_with_counter();
        view.display(Path::new("/data/a.dm3")).unwrap();

        let text = view.surface().text();
        assert!(text.starts_with("file name = /data/a.dm3\n"));
        assert!(text.contains("Microscope Info.Voltage = 300000\n"));
        // all-or-nothing calibration fallback kicked in
        assert!(text.contains("PhysicalSizeX = 1\n"));
    }

    #[test]
    fn mrc_files_render_converted_voxel_sizes() {
        let (mut view, _) = view_with_counter();
        view.display(Path::new("/data/a.mrc")).unwrap();

        let text = view.surface().text();
        assert!(text.contains("PhysicalSizeX = 0.0000000002\n") || text.contains("PhysicalSizeX = 2e-10\n"));
        assert!(text.contains("PhysicalSizeXUnit = m\n"));
    }

    #[test]
    fn repeat_displays_hit_the_cache() {
        let (mut view, calls) = view_with_counter();
        let path = Path::new("/data/a.dm4");
        view.display(path).unwrap();
        view.display(path).unwrap();
        view.display(path).unwrap();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn failed_read_clears_pane_and_is_retried() {
        let mut view = MetadataInfoView::new(BrokenDm, StubMrc, TextPane::new());
        let path = Path::new("/data/broken.dm3");

        view.surface.show_text("stale");
        assert!(view.display(path).is_err());
        assert_eq!(view.surface().text(), "");

        // the failure was not cached, so the next display reads again
        assert!(view.display(path).is_err());
    }

    #[test]
    fn unhandled_extension_shows_only_the_file_name() {
        let (mut view, calls) = view_with_counter();
        view.display(Path::new("/data/a.emd")).unwrap();
        assert_eq!(view.surface().text(), "file name = /data/a.emd\n");
        assert_eq!(calls.get(), 0);
    }
}
