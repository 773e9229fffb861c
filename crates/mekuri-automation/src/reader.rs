use anyhow::Result;

use crate::script::run_osascript;

/// Bring the reader application to the foreground.
pub fn activate_reader(app_name: &str) -> Result<()> {
    run_osascript(&activation_script(app_name))
}

/// Toggle fullscreen with the Ctrl+Cmd+F shortcut.
pub fn toggle_fullscreen() -> Result<()> {
    run_osascript(
        "tell application \"System Events\" to keystroke \"f\" using {control down, command down}",
    )
}

fn activation_script(app_name: &str) -> String {
    let app_name = app_name.replace('"', "\\\"");
    format!("tell application \"{app_name}\" to activate")
}
