//! Application State
//!
//! Shared state accessible by all handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;

use crate::chart::SvgChartBackend;
use crate::config::ServerConfig;
use crate::widget::{RequestsWidget, SharedWidget};

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// The hosted requests widget
    pub widget: SharedWidget<SvgChartBackend>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Host a fresh widget painting onto `surface`
    pub fn new(surface: SvgChartBackend, config: ServerConfig) -> Self {
        Self::with_widget(Arc::new(RwLock::new(RequestsWidget::new(surface))), config)
    }

    /// Host an existing shared widget
    pub fn with_widget(widget: SharedWidget<SvgChartBackend>, config: ServerConfig) -> Self {
        Self {
            widget,
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
