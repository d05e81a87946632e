//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (widget has data)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;
use crate::widget::Phase;

/// GET /health/live
///
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// 200 once the widget left Loading. A failed fetch keeps this at 503.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    match state.widget.read().await.phase() {
        Phase::Ready => StatusCode::OK,
        Phase::Loading => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// GET /health
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let widget = state.widget.read().await;
    let phase = widget.phase();

    let status = match phase {
        Phase::Ready => "healthy",
        Phase::Loading => "starting",
    };

    Json(HealthResponse {
        status: status.to_string(),
        widget: phase,
        chart: widget.chart_stats(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_liveness() {
        let status = liveness().await;
        assert_eq!(status, StatusCode::OK);
    }
}
