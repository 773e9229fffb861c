use anyhow::Result;

#[cfg(target_os = "macos")]
mod run {
    use std::process::Command;

    use anyhow::{Context, Result, bail};

    pub fn osascript(script: &str) -> Result<()> {
        let output = Command::new("osascript")
            .arg("-e")
            .arg(script)
            .output()
            .context("Failed to run osascript")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!("osascript failed: {}", stderr.trim());
        }

        Ok(())
    }
}

#[cfg(not(target_os = "macos"))]
mod run {
    use anyhow::{Result, bail};

    pub fn osascript(_script: &str) -> Result<()> {
        bail!("OS automation is only available on macOS")
    }
}

/// Run an AppleScript snippet through osascript.
///
/// Automation targets are opaque side-effecting collaborators; callers only
/// see success or failure.
pub(crate) fn run_osascript(script: &str) -> Result<()> {
    run::osascript(script)
}
