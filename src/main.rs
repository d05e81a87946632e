//! CheckInn Dashboard Server
//!
//! Run with: cargo run --bin checkinn-dashboard
//!
//! # Configuration
//!
//! Config file (`--config`, or `<config_dir>/checkinn-dashboard/config.toml`,
//! or `./config.toml`) plus environment variables:
//! - `CHECKINN_SOURCE_URL`: Requests endpoint
//! - `CHECKINN_REQUEST_TIMEOUT_SECS`: Client timeout (default: none)
//! - `CHECKINN_HOST`: Host to bind to (default: 0.0.0.0)
//! - `CHECKINN_PORT`: Port to listen on (default: 8086)
//! - `CHECKINN_LOG_LEVEL`, `CHECKINN_LOG_FORMAT`: Logging
//! - `RUST_LOG`: Overrides the log filter

use checkinn_dashboard::api::{serve, AppState};
use checkinn_dashboard::chart::{SurfaceSize, SvgChartBackend};
use checkinn_dashboard::config::{generate_default_config, Config};
use checkinn_dashboard::logging::init_tracing;
use checkinn_dashboard::requests::HttpRequestSource;
use checkinn_dashboard::widget::mount_shared;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "checkinn-dashboard", version, about = "Serve the requests-per-hotel dashboard")]
struct Args {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print a default config file and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.print_config {
        print!("{}", generate_default_config());
        return Ok(());
    }

    let config = Config::resolve(args.config.as_deref())?;
    init_tracing(&config.logging);

    tracing::info!("Starting CheckInn dashboard v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Requests endpoint: {}", config.source.url);

    let source = HttpRequestSource::new(&config.source)?;
    let surface = SvgChartBackend::new(SurfaceSize::from(config.chart));
    let state = AppState::new(surface, config.server.clone());

    // Mount: the single fetch runs in the background while the page shows Loading
    let widget = Arc::clone(&state.widget);
    let mount_task = tokio::spawn(async move {
        if let Err(e) = mount_shared(&widget, &source).await {
            tracing::error!("Failed to draw widget: {}", e);
        }
    });

    let widget = Arc::clone(&state.widget);
    let result = serve(state, &config.server).await;

    // Teardown: drop any in-flight fetch and release the chart
    mount_task.abort();
    widget.write().await.unmount();
    tracing::info!("CheckInn dashboard stopped");

    result?;
    Ok(())
}
