use std::env;

use serde::{Deserialize, Serialize};

use self::capture::CaptureConfig;
use self::ocr::OcrConfig;
use self::output::OutputConfig;
use self::pager::PagerConfig;

pub mod capture;
pub mod ocr;
pub mod output;
pub mod pager;

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub capture: CaptureConfig,
    pub ocr: OcrConfig,
    pub pager: PagerConfig,
    pub output: OutputConfig,

    /// Capacity of the work queue between capture and recognition
    pub queue_capacity: usize,
}

impl Config {
    pub fn new() -> Self {
        let queue_capacity = env::var("MEKURI_QUEUE_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(8); // a handful of pages in flight

        Config {
            capture: CaptureConfig::new(),
            ocr: OcrConfig::new(),
            pager: PagerConfig::new(),
            output: OutputConfig::new(),
            queue_capacity,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
