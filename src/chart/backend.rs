//! Drawing Surface Abstraction

use thiserror::Error;

use super::config::LineChartConfig;

/// A drawing surface that can host chart instances
///
/// `create` paints a new chart from a configuration; `destroy` releases an
/// instance previously returned by `create`.
pub trait ChartBackend: Send + Sync {
    /// Live chart instance bound to this surface
    type Chart: Send + Sync;

    fn create(&self, config: &LineChartConfig) -> Result<Self::Chart, ChartError>;

    fn destroy(&self, chart: Self::Chart);
}

/// Errors raised while painting a chart
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Invalid chart configuration: {0}")]
    InvalidConfig(String),

    #[error("Drawing failed: {0}")]
    Draw(String),
}
