//! In-memory surfaces.
//!
//! The GUI shell wraps its widget handles in these traits; for tests and
//! headless use these plain buffers are enough.

use databrowser_abi::{FrameData, ImageSurface, TextSurface};

/// An image surface that just holds the last frame.
#[derive(Default)]
pub struct FrameBuffer {
    frame: Option<FrameData>,
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame(&self) -> Option<&FrameData> {
        self.frame.as_ref()
    }
}

impl ImageSurface for FrameBuffer {
    fn show_frame(&mut self, frame: FrameData) {
        self.frame = Some(frame);
    }

    fn clear(&mut self) {
        self.frame = Some(FrameData::placeholder());
    }
}

/// A text surface that just holds the last text.
#[derive(Default)]
pub struct TextPane {
    text: String,
}

impl TextPane {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl TextSurface for TextPane {
    fn show_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn clear(&mut self) {
        self.text.clear();
    }
}
