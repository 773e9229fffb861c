use std::env;

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    "output.txt".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct OutputConfig {
    /// Recognized text is appended here, one record per page
    #[serde(default = "default_path")]
    pub path: String,
}

impl OutputConfig {
    pub fn new() -> Self {
        let path = env::var("MEKURI_OUTPUT_FILE").unwrap_or_else(|_| default_path());

        Self { path }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::new()
    }
}
