use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod output;
mod pipeline;
mod profile;
mod signals;

#[cfg(test)]
mod tests;

#[derive(Parser, Debug)]
#[command(name = "mekuri", about = "Turns e-reader pages and captures their text")]
struct Cli {
    /// Path to the config file
    #[arg(short, long, default_value = "config.json")]
    config: PathBuf,

    /// Override the output file path
    #[arg(short, long)]
    output: Option<String>,

    /// Skip activating the reader application
    #[arg(long)]
    no_activate: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = profile::load_config(&cli.config)?;
    if let Some(output) = cli.output {
        config.output.path = output;
    }

    if !cli.no_activate {
        prepare_reader(&config).await;
    }

    tracing::info!(
        "Starting session: region {:?}, language {}, output {}",
        config.capture.region,
        config.ocr.language,
        config.output.path
    );
    println!("Submit two empty lines to stop the session early.");

    let summary = pipeline::run(config).await?;

    tracing::info!(
        "Session finished: {} pages captured, {} records written",
        summary.pages_captured,
        summary.records_written
    );

    Ok(())
}

/// Bring the reader to the front and let the user line up the book.
///
/// Activation and fullscreen are opaque OS automation calls; failures are
/// logged and the session continues.
async fn prepare_reader(config: &mekuri_config::Config) {
    if let Err(e) = mekuri_automation::activate_reader(&config.pager.app_name) {
        tracing::warn!("Failed to activate {}: {}", config.pager.app_name, e);
    }
    tokio::time::sleep(Duration::from_secs(2)).await;

    if atty::is(atty::Stream::Stdin) {
        print!(
            "Open the target book in {} and press Enter to start... ",
            config.pager.app_name
        );
        io::stdout().flush().ok();
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line).ok();
    }

    if let Err(e) = mekuri_automation::activate_reader(&config.pager.app_name) {
        tracing::warn!("Failed to activate {}: {}", config.pager.app_name, e);
    }

    if config.pager.fullscreen {
        if let Err(e) = mekuri_automation::toggle_fullscreen() {
            tracing::warn!("Failed to toggle fullscreen: {}", e);
        }
        tokio::time::sleep(Duration::from_secs(2)).await;
    }
}
