//! # CheckInn Dashboard
//!
//! The "requests per hotel" dashboard widget: fetch the request list once,
//! aggregate it per hotel and per department, and present a line chart with a
//! short text summary.
//!
//! ## Modules
//!
//! - [`requests`]: Request records and the HTTP request source
//! - [`aggregate`]: Totals, unique departments and per-hotel counts
//! - [`chart`]: Line chart configuration and the SVG drawing surface
//! - [`widget`]: Loading/Ready state machine and its views
//! - [`api`]: Axum server hosting the widget
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use checkinn_dashboard::chart::SvgChartBackend;
//! use checkinn_dashboard::config::SourceConfig;
//! use checkinn_dashboard::requests::HttpRequestSource;
//! use checkinn_dashboard::widget::RequestsWidget;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = HttpRequestSource::new(&SourceConfig::default())?;
//!     let mut widget = RequestsWidget::new(SvgChartBackend::default());
//!
//!     widget.mount(&source).await?;
//!
//!     if let Some(summary) = widget.summary() {
//!         println!("Total Requests: {}", summary.total_requests);
//!     }
//!     println!("{}", widget.render_page()?);
//!
//!     widget.unmount();
//!     Ok(())
//! }
//! ```

pub mod aggregate;
pub mod api;
pub mod chart;
pub mod config;
pub mod logging;
pub mod requests;
pub mod widget;

// Re-export top-level types for convenience
pub use aggregate::{summarize, HotelCount, HotelCounts, RequestSummary};

pub use api::{build_router, serve, ApiError, AppState};

pub use chart::{ChartBackend, ChartError, ChartSlot, LineChartConfig, SvgChart, SvgChartBackend};

pub use config::{Config, ConfigError};

pub use requests::{FetchError, HttpRequestSource, Request, RequestSource};

pub use widget::{mount_shared, Phase, RequestsWidget, SharedWidget, WidgetError};
