//! Reader seams for the binary microscopy containers.
//!
//! Actual dm3/dm4 and MRC parsing is delegated to whatever reader the host
//! links in; the browser core only consumes the raw dumps these traits
//! return and never touches the binary layouts itself.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::metadata::{DmTagDump, MrcHeaderDump};
use crate::surface::FrameData;

/// Failure while opening or decoding a data file. Always propagated to the
/// shell; never swallowed.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed file {}: {}", .path.display(), .detail)]
    Malformed { path: PathBuf, detail: String },

    #[error("unsupported file {}", .path.display())]
    Unsupported { path: PathBuf },
}

impl ReadError {
    pub fn malformed(path: &Path, detail: impl Into<String>) -> Self {
        ReadError::Malformed {
            path: path.to_path_buf(),
            detail: detail.into(),
        }
    }

    pub fn unsupported(path: &Path) -> Self {
        ReadError::Unsupported {
            path: path.to_path_buf(),
        }
    }
}

/// Dumps the flat tag dictionary of a dm-family file.
pub trait DmTagReader {
    fn read_tags(&self, path: &Path) -> Result<DmTagDump, ReadError>;
}

/// Dumps the parsed header of an mrc-family file.
pub trait MrcHeaderReader {
    fn read_header(&self, path: &Path) -> Result<MrcHeaderDump, ReadError>;
}

/// Reads the primary image frame of a microscopy file for display.
pub trait FrameReader {
    fn read_frame(&self, path: &Path) -> Result<FrameData, ReadError>;
}
