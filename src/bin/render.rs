//! CheckInn Render
//!
//! Mounts the widget once, waits for the fetch and writes the rendered page.
//!
//! Run with: cargo run --bin checkinn-render -- --out dashboard.html --chart-out chart.svg

use checkinn_dashboard::chart::{SurfaceSize, SvgChartBackend};
use checkinn_dashboard::config::Config;
use checkinn_dashboard::logging::init_tracing;
use checkinn_dashboard::requests::HttpRequestSource;
use checkinn_dashboard::widget::RequestsWidget;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "checkinn-render", version, about = "Render the requests-per-hotel dashboard once")]
struct Args {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the HTML page here instead of stdout
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Also write the chart SVG to this path
    #[arg(long)]
    chart_out: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = Config::resolve(args.config.as_deref())?;
    init_tracing(&config.logging);

    let source = HttpRequestSource::new(&config.source)?;
    let mut widget = RequestsWidget::new(SvgChartBackend::new(SurfaceSize::from(config.chart)));

    widget.mount(&source).await?;
    if widget.is_loading() {
        tracing::warn!("Fetch did not succeed, rendering the loading placeholder");
    }

    let page = widget.render_page()?;
    match &args.out {
        Some(path) => {
            std::fs::write(path, &page)?;
            tracing::info!("Wrote page to {:?}", path);
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(page.as_bytes())?;
            stdout.flush()?;
        }
    }

    if let Some(path) = &args.chart_out {
        match widget.chart() {
            Some(chart) => {
                std::fs::write(path, chart.svg())?;
                tracing::info!("Wrote chart to {:?}", path);
            }
            None => tracing::warn!("No chart to write"),
        }
    }

    widget.unmount();
    Ok(())
}
