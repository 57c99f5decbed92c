//! Last-resort view: filesystem facts for files nothing else can open.

use std::fs;
use std::path::Path;
use std::time::UNIX_EPOCH;

use databrowser_abi::{LoadFailure, MetaValue, MetadataRecord, TextSurface, ViewPlugin};
use databrowser_core::render_text;

/// Displays name, size and modification time for any file.
///
/// `supports` is always false: this view never wins automatic selection on
/// its own merits, it is registered as the designated fallback instead.
pub struct FileInfoView<S: TextSurface> {
    surface: S,
}

impl<S: TextSurface> FileInfoView<S> {
    pub fn new(surface: S) -> Self {
        Self { surface }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    fn describe(&self, path: &Path) -> std::io::Result<String> {
        let meta = fs::metadata(path)?;
        let mut rec = MetadataRecord::for_file(path);
        rec.insert(
            "size (bytes)",
            MetaValue::Int(i64::try_from(meta.len()).unwrap_or(i64::MAX)),
        );
        if let Ok(modified) = meta.modified() {
            if let Ok(age) = modified.duration_since(UNIX_EPOCH) {
                rec.insert(
                    "modified (unix)",
                    MetaValue::Int(i64::try_from(age.as_secs()).unwrap_or(i64::MAX)),
                );
            }
        }
        Ok(render_text(&rec))
    }
}

impl<S: TextSurface> ViewPlugin for FileInfoView<S> {
    fn name(&self) -> &str {
        "file_info"
    }

    fn supports(&self, _path: &Path) -> bool {
        false
    }

    fn display(&mut self, path: &Path) -> Result<(), LoadFailure> {
        match self.describe(path) {
            Ok(text) => {
                self.surface.show_text(&text);
                Ok(())
            }
            Err(err) => {
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

    #[test]
    fn never_claims_a_file() {
        let view = FileInfoView::new(TextPane::new());
        assert!(!view.supports(Path::new("a.png")));
        assert!(!view.supports(Path::new("a.xyz")));
    }

    #[test]
    fn shows_name_and_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blob.xyz");
        std::fs::write(&path, b"hello").unwrap();

        let mut view = FileInfoView::new(TextPane::new());
        view.display(&path).unwrap();

        let text = view.surface().text();
        assert!(text.starts_with(&format!("file name = {}\n", path.display())));
        assert!(text.contains("size (bytes) = 5\n"));
    }

    #[test]
    fn missing_file_clears_pane() {
        let mut view = FileInfoView::new(TextPane::new());
        view.surface.show_text("stale");
        assert!(view.display(Path::new("/nowhere/gone.xyz")).is_err());
        assert_eq!(view.surface().text(), "");
    }
}
