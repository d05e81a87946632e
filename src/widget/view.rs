//! Widget Views
//!
//! HTML page (askama) and JSON projection of the widget state.

use askama::Template;
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::state::Phase;
use crate::aggregate::{HotelCount, RequestSummary};
use crate::chart::config::CHART_TITLE;

/// Dashboard page
///
/// While loading only the placeholder is rendered. Once ready the page shows
/// the chart container (80% wide, capped at 600px) and the text summary.
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardPage {
    pub loading: bool,
    pub title: String,
    pub total_requests: usize,
    pub departments: Vec<String>,
    pub chart_svg: Option<String>,
}

impl DashboardPage {
    pub fn loading() -> Self {
        Self {
            loading: true,
            title: CHART_TITLE.to_string(),
            total_requests: 0,
            departments: Vec::new(),
            chart_svg: None,
        }
    }

    /// Ready page. Without a summary (empty list) totals show their initial values.
    pub fn ready(summary: Option<&RequestSummary>, chart_svg: Option<&str>) -> Self {
        Self {
            loading: false,
            title: CHART_TITLE.to_string(),
            total_requests: summary.map(|s| s.total_requests).unwrap_or(0),
            departments: summary
                .map(|s| s.unique_departments.clone())
                .unwrap_or_default(),
            chart_svg: chart_svg.map(str::to_string),
        }
    }
}

/// JSON body of `GET /api/v1/summary`
#[derive(Debug, Clone, Serialize)]
pub struct SummaryResponse {
    pub phase: Phase,
    pub loading: bool,
    pub total_requests: usize,
    pub unique_departments: Vec<String>,
    pub requests_per_hotel: Vec<HotelCount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl SummaryResponse {
    pub fn from_parts(
        phase: Phase,
        summary: Option<&RequestSummary>,
        updated_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            phase,
            loading: phase == Phase::Loading,
            total_requests: summary.map(|s| s.total_requests).unwrap_or(0),
            unique_departments: summary
                .map(|s| s.unique_departments.clone())
                .unwrap_or_default(),
            requests_per_hotel: summary
                .map(|s| s.requests_per_hotel.iter().cloned().collect())
                .unwrap_or_default(),
            updated_at,
        }
    }
}
