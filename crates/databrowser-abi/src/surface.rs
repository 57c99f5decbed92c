//! Display surface contracts.
//!
//! A view plugin owns its surface and is the only writer to it. The failure
//! contract matters here: after a failed load the plugin must `clear()` its
//! surface before surfacing the error, so stale data from the previous file
//! is never left on screen.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Side length of the placeholder frame shown after a failed load.
const PLACEHOLDER_SIDE: u32 = 10;

static PLACEHOLDER: Lazy<FrameData> = Lazy::new(|| FrameData {
    width: PLACEHOLDER_SIDE,
    height: PLACEHOLDER_SIDE,
    data: vec![0.0; (PLACEHOLDER_SIDE * PLACEHOLDER_SIDE) as usize],
});

/// A single grayscale frame, row-major, `width * height` samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameData {
    pub width: u32,
    pub height: u32,
    pub data: Vec<f32>,
}

impl FrameData {
    /// The all-zero frame a surface falls back to after a failed load.
    pub fn placeholder() -> FrameData {
        PLACEHOLDER.clone()
    }
}

/// An image pane owned by a viewer.
pub trait ImageSurface {
    fn show_frame(&mut self, frame: FrameData);

    /// Reset to the safe default (the placeholder frame).
    fn clear(&mut self);
}

/// A text pane owned by a viewer.
pub trait TextSurface {
    fn show_text(&mut self, text: &str);

    /// Reset to the safe default (no content).
    fn clear(&mut self);
}
