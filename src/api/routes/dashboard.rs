//! Dashboard Routes
//!
//! - GET / - Dashboard page (loading placeholder or chart + summary)
//! - GET /chart.svg - Current chart
//! - GET /api/v1/summary - Widget state as JSON

use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse},
    Json,
};
use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::widget::SummaryResponse;

/// GET /
pub async fn dashboard_page(State(state): State<Arc<AppState>>) -> ApiResult<Html<String>> {
    let widget = state.widget.read().await;
    Ok(Html(widget.render_page()?))
}

/// GET /chart.svg
///
/// 404 until the first chart has been painted.
pub async fn chart_svg(State(state): State<Arc<AppState>>) -> ApiResult<impl IntoResponse> {
    let widget = state.widget.read().await;
    let chart = widget
        .chart()
        .ok_or_else(|| ApiError::NotFound("no chart has been drawn yet".to_string()))?;

    Ok((
        [(header::CONTENT_TYPE, "image/svg+xml")],
        chart.svg().to_string(),
    ))
}

/// GET /api/v1/summary
pub async fn summary(State(state): State<Arc<AppState>>) -> Json<SummaryResponse> {
    Json(state.widget.read().await.summary_response())
}
