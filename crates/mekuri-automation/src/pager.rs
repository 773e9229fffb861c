use anyhow::Result;
use mekuri_types::PageTurnDirection;

use crate::script::run_osascript;

/// Sends a "next page" input to the reader application.
pub trait PageTurner {
    fn turn_page(&self, direction: PageTurnDirection) -> Result<()>;
}

/// Turns pages with a simulated arrow key press via System Events.
pub struct SystemPager;

impl SystemPager {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemPager {
    fn default() -> Self {
        Self::new()
    }
}

impl PageTurner for SystemPager {
    fn turn_page(&self, direction: PageTurnDirection) -> Result<()> {
        run_osascript(&key_code_script(direction))
    }
}

/// macOS virtual key codes for the arrow keys
fn key_code(direction: PageTurnDirection) -> u8 {
    match direction {
        PageTurnDirection::Left => 123,
        PageTurnDirection::Right => 124,
        PageTurnDirection::Down => 125,
        PageTurnDirection::Up => 126,
    }
}

fn key_code_script(direction: PageTurnDirection) -> String {
    format!(
        "tell application \"System Events\" to key code {}",
        key_code(direction)
    )
}
