use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use mekuri_config::Config;

/// Load the config file, falling back to built-in defaults when it is
/// missing.
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    if !path.exists() {
        tracing::warn!("Config {} not found, using defaults", path.display());
        return Ok(Config::new());
    }

    tracing::info!("Loading config from {}", path.display());
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)?;
    Ok(config)
}
