//! Metadata normalization: raw reader dumps -> uniform display records.
//!
//! The two container families keep their bespoke extraction rules in
//! `dm.rs` and `mrc.rs`; `sidecar.rs` handles the plain-text companions
//! that ride next to mrc-family stacks. Anything else normalizes to a
//! record holding only the file name.

use std::path::Path;

mod dm;
mod mrc;
mod sidecar;

pub use dm::normalize_dm;
pub use mrc::normalize_mrc;

/// Which bespoke extraction rules apply to a file, by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    /// Digital Micrograph containers (`.dm3`, `.dm4`).
    DmFamily,
    /// MRC-layout containers (`.mrc`, `.ali`, `.rec`).
    MrcFamily,
    Other,
}

impl FormatKind {
    pub fn from_path(path: &Path) -> FormatKind {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return FormatKind::Other;
        };
        match ext.to_ascii_lowercase().as_str() {
            "dm3" | "dm4" => FormatKind::DmFamily,
            "mrc" | "ali" | "rec" => FormatKind::MrcFamily,
            _ => FormatKind::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_from_extension() {
        assert_eq!(FormatKind::from_path(Path::new("a.dm3")), FormatKind::DmFamily);
        assert_eq!(FormatKind::from_path(Path::new("a.DM4")), FormatKind::DmFamily);
        assert_eq!(FormatKind::from_path(Path::new("a.ali")), FormatKind::MrcFamily);
        assert_eq!(FormatKind::from_path(Path::new("a.rec")), FormatKind::MrcFamily);
        assert_eq!(FormatKind::from_path(Path::new("a.emd")), FormatKind::Other);
        assert_eq!(FormatKind::from_path(Path::new("noext")), FormatKind::Other);
    }
}
