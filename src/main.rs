//! WA Manager - terminal dashboard and campaign composer
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

/// WA Manager - compose WhatsApp marketing campaigns from the terminal
#[derive(Parser, Debug)]
#[command(name = "wam")]
#[command(about = "Terminal dashboard and campaign composer", long_about = None)]
struct Args {
    /// Directory holding `.wam/config.toml` (defaults to the current directory)
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Write a default `.wam/config.toml` and exit
    #[arg(long)]
    init: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let base_path = args
        .path
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    if args.init {
        let config_path = wam_app::config::init_config_dir(&base_path)?;
        eprintln!("Config written to {}", config_path.display());
        return Ok(());
    }

    wam_core::logging::init()?;
    info!("Base path: {}", base_path.display());

    wam_tui::run(&base_path).await?;
    Ok(())
}
