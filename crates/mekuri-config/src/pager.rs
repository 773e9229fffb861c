use mekuri_types::PageTurnDirection;
use serde::{Deserialize, Serialize};

fn default_app_name() -> String {
    "Kindle".to_string()
}

fn default_direction() -> PageTurnDirection {
    PageTurnDirection::Left
}

fn default_turn_delay_ms() -> u64 {
    1500
}

fn default_fullscreen() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct PagerConfig {
    /// Reader application to drive
    #[serde(default = "default_app_name")]
    pub app_name: String,
    /// Arrow key that advances to the next page
    #[serde(default = "default_direction")]
    pub direction: PageTurnDirection,
    /// Pause after each page turn before the next capture
    #[serde(default = "default_turn_delay_ms")]
    pub turn_delay_ms: u64,
    #[serde(default = "default_fullscreen")]
    pub fullscreen: bool,
}

impl PagerConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            direction: default_direction(),
            turn_delay_ms: default_turn_delay_ms(),
            fullscreen: default_fullscreen(),
        }
    }
}
