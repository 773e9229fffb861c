use std::env;

use mekuri_types::TextOrientation;
use serde::{Deserialize, Serialize};

fn default_language() -> String {
    "jpn_vert".to_string()
}

fn default_orientation() -> TextOrientation {
    TextOrientation::Vertical
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct OcrConfig {
    /// Tesseract language code, e.g. "jpn_vert" or "eng"
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_orientation")]
    pub orientation: TextOrientation,
    /// Trained-data directory, falls back to TESSDATA_PREFIX
    pub tessdata_dir: Option<String>,
}

impl OcrConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Effective tessdata directory: config value first, then environment
    pub fn tessdata(&self) -> Option<String> {
        self.tessdata_dir
            .clone()
            .or_else(|| env::var("TESSDATA_PREFIX").ok())
    }
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            orientation: default_orientation(),
            tessdata_dir: None,
        }
    }
}
