//! zipline - terminal client for a remote archive-optimization service
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use url::Url;

use zipline_app::{AppState, Message, Settings};

/// zipline - upload a project archive and watch it get optimized
#[derive(Parser, Debug)]
#[command(name = "zipline")]
#[command(about = "Terminal client for a remote archive-optimization service", long_about = None)]
struct Args {
    /// Archive to preselect on the submission form
    #[arg(value_name = "ARCHIVE")]
    archive: Option<PathBuf>,

    /// Processing service base URL (overrides the config file)
    #[arg(long, value_name = "URL")]
    server: Option<String>,

    /// Alternate config file path
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    zipline_core::logging::init()?;

    let args = Args::parse();

    let config_path = Settings::config_path(args.config);
    let mut settings = Settings::load(&config_path)?;
    if let Some(server) = args.server {
        settings.server_url = server;
    }

    let server: Url = settings
        .server_url
        .parse()
        .wrap_err_with(|| format!("invalid server URL: {}", settings.server_url))?;

    let mut state = AppState::new(settings, server);
    if let Some(archive) = args.archive {
        // Preselection goes through update() like every other mutation
        zipline_app::update(&mut state, Message::ArchiveSelected(archive));
    }

    zipline_tui::run(state).await?;
    Ok(())
}
