use mekuri_types::CaptureRegion;
use serde::{Deserialize, Serialize};

fn default_region() -> CaptureRegion {
    CaptureRegion {
        x: 0,
        y: 0,
        width: 800,
        height: 1080,
    }
}

fn default_retry_delay_ms() -> u64 {
    500
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct CaptureConfig {
    /// Screen region the page is rendered into
    #[serde(default = "default_region")]
    pub region: CaptureRegion,
    /// Pause before retrying a failed screenshot
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

impl CaptureConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}
