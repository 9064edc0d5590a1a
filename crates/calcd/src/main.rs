//! Calc Daemon - India Tools calculation server
//!
//! Serves the age, CGPA, GST and EMI calculators over HTTP.

use anyhow::Result;
use calc_common::Config;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "calcd")]
#[command(about = "India Tools calculation server", long_about = None)]
#[command(version)]
struct Args {
    /// Path to config file (overrides $INDIA_TOOLS_CONFIG)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Listen address, e.g. 127.0.0.1:8000 (overrides config)
    #[arg(long)]
    bind: Option<String>,

    /// Write a default config file to PATH and exit
    #[arg(long, value_name = "PATH")]
    write_config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    if let Some(path) = args.write_config {
        return Config::save_default(&path);
    }

    info!("[BOOT] calcd v{} starting...", env!("CARGO_PKG_VERSION"));

    let mut config = Config::load(args.config.as_deref());
    if let Some(bind) = args.bind {
        config.server.bind = bind;
    }

    calcd::server::run(config).await
}
