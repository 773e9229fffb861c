use serde::{Deserialize, Serialize};

/// Rectangular screen region the reader renders the page into.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CaptureRegion {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Arrow key used to advance the reader by one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageTurnDirection {
    Left,
    Right,
    Up,
    Down,
}

/// Assumed layout of the text on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextOrientation {
    Horizontal,
    Vertical,
}

/// A captured raster image plus its origin region.
///
/// Owned by the capture loop until it is handed to the work queue, then by
/// the recognition loop until recognition finishes.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Raw RGBA8 pixel data, row-major
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub region: CaptureRegion,
}

impl Frame {
    /// Byte length `data` must have for the frame dimensions
    pub fn expected_len(&self) -> usize {
        self.width as usize * self.height as usize * 4
    }
}

/// One unit of work flowing from the capture loop to the recognition loop.
#[derive(Debug)]
pub enum WorkItem {
    /// A captured page awaiting recognition
    Page { frame: Frame, number: u32 },
    /// No more work will arrive
    Done,
}
