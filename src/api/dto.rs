//! Data Transfer Objects
//!
//! Response types for the dashboard endpoints that are not widget views.

use serde::Serialize;

use crate::chart::ChartStats;
use crate::widget::Phase;

/// Full health status response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy (Ready) or starting (Loading)
    pub status: String,
    /// Widget phase
    pub widget: Phase,
    /// Chart lifetime counters
    pub chart: ChartStats,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
