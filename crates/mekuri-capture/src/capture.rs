use anyhow::{Context, Result};
use mekuri_types::{CaptureRegion, Frame};
use xcap::Monitor;

/// Source of captured frames for the capture loop.
///
/// The screen is the production source; tests substitute scripted frames.
pub trait FrameSource {
    fn capture(&mut self) -> Result<Frame>;
}

/// Captures a fixed screen region via the platform screenshot primitive.
pub struct ScreenCapture {
    region: CaptureRegion,
}

impl ScreenCapture {
    pub fn new(region: CaptureRegion) -> Self {
        Self { region }
    }
}

impl FrameSource for ScreenCapture {
    fn capture(&mut self) -> Result<Frame> {
        capture_screen_region(self.region)
    }
}

/// Capture a region of the screen as a raw RGBA frame
pub fn capture_screen_region(region: CaptureRegion) -> Result<Frame> {
    let monitors = Monitor::all().context("Failed to get monitors")?;

    let monitor = monitors
        .iter()
        .find(|m| {
            region.x >= m.x()
                && region.y >= m.y()
                && region.x + region.width as i32 <= m.x() + m.width() as i32
                && region.y + region.height as i32 <= m.y() + m.height() as i32
        })
        .or(monitors.first())
        .context("No monitor found")?;

    let image = monitor.capture_image().context("Failed to capture screen")?;

    // Crop to region using xcap's image (0.25)
    let cropped = xcap::image::imageops::crop_imm(
        &image,
        (region.x - monitor.x()) as u32,
        (region.y - monitor.y()) as u32,
        region.width,
        region.height,
    )
    .to_image();

    Ok(Frame {
        width: cropped.width(),
        height: cropped.height(),
        data: cropped.into_raw(),
        region,
    })
}
