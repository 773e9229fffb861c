mod capture;
mod fingerprint;

pub use capture::{FrameSource, ScreenCapture, capture_screen_region};
pub use fingerprint::Fingerprint;
