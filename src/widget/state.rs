//! Widget State Machine

use askama::Template;
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::view::{DashboardPage, SummaryResponse};
use super::WidgetError;
use crate::aggregate::{summarize, RequestSummary};
use crate::chart::{ChartBackend, ChartSlot, ChartStats, LineChartConfig};
use crate::requests::{FetchError, Request, RequestSource};

/// Presentation phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Waiting for the first successful fetch
    Loading,
    /// Data arrived; terminal for a given mount
    Ready,
}

/// Dashboard widget for one mount
pub struct RequestsWidget<B: ChartBackend> {
    phase: Phase,
    requests: Vec<Request>,
    summary: Option<RequestSummary>,
    chart: ChartSlot<B>,
    fetch_issued: bool,
    torn_down: bool,
    updated_at: Option<DateTime<Utc>>,
}

impl<B: ChartBackend> RequestsWidget<B> {
    /// Create a widget in the Loading phase bound to `surface`
    pub fn new(surface: B) -> Self {
        Self {
            phase: Phase::Loading,
            requests: Vec::new(),
            summary: None,
            chart: ChartSlot::new(surface),
            fetch_issued: false,
            torn_down: false,
            updated_at: None,
        }
    }

    /// Claim the single fetch of this mount. Returns `false` if a fetch was
    /// already issued or the widget is torn down.
    pub fn begin_mount(&mut self) -> bool {
        if self.torn_down {
            tracing::warn!("Mount requested after teardown, ignoring");
            return false;
        }
        if self.fetch_issued {
            tracing::warn!("Requests already fetched for this mount, ignoring");
            return false;
        }
        self.fetch_issued = true;
        true
    }

    /// Apply the outcome of the mount fetch.
    ///
    /// Failures are logged and leave the widget in Loading. Outcomes that
    /// arrive after [`unmount`](Self::unmount) are discarded.
    pub fn apply_fetch(
        &mut self,
        outcome: Result<Vec<Request>, FetchError>,
    ) -> Result<(), WidgetError> {
        if self.torn_down {
            tracing::debug!("Discarding fetch result that arrived after teardown");
            return Ok(());
        }

        match outcome {
            Ok(requests) => {
                self.phase = Phase::Ready;
                tracing::info!(count = requests.len(), "Widget ready");
                self.on_requests_changed(requests)
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching data");
                Ok(())
            }
        }
    }

    /// Mount without sharing: fetch once from `source` and apply the outcome
    pub async fn mount<S>(&mut self, source: &S) -> Result<(), WidgetError>
    where
        S: RequestSource + ?Sized,
    {
        if !self.begin_mount() {
            return Ok(());
        }
        let outcome = source.fetch_requests().await;
        self.apply_fetch(outcome)
    }

    /// Replace the request list after the widget became Ready
    pub fn replace_requests(&mut self, requests: Vec<Request>) -> Result<(), WidgetError> {
        if self.phase != Phase::Ready || self.torn_down {
            return Err(WidgetError::NotReady);
        }
        self.on_requests_changed(requests)
    }

    /// Store the list, then recompute and redraw when it is non-empty
    fn on_requests_changed(&mut self, requests: Vec<Request>) -> Result<(), WidgetError> {
        self.requests = requests;
        self.updated_at = Some(Utc::now());

        let Some(summary) = summarize(&self.requests) else {
            tracing::debug!("Empty request list, keeping previous summary and chart");
            return Ok(());
        };

        let config = LineChartConfig::requests_per_hotel(&summary.requests_per_hotel);
        self.summary = Some(summary);
        self.chart.redraw(&config)?;

        tracing::debug!(stats = ?self.chart.stats(), "Chart redrawn");
        Ok(())
    }

    /// Tear the widget down: release the chart and ignore late responses
    pub fn unmount(&mut self) {
        if !self.torn_down {
            self.torn_down = true;
            self.chart.release();
            tracing::debug!("Widget unmounted");
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn requests(&self) -> &[Request] {
        &self.requests
    }

    pub fn summary(&self) -> Option<&RequestSummary> {
        self.summary.as_ref()
    }

    pub fn chart(&self) -> Option<&B::Chart> {
        self.chart.current()
    }

    pub fn chart_stats(&self) -> ChartStats {
        self.chart.stats()
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// JSON projection of the current state
    pub fn summary_response(&self) -> SummaryResponse {
        SummaryResponse::from_parts(self.phase, self.summary.as_ref(), self.updated_at)
    }
}

impl<B> RequestsWidget<B>
where
    B: ChartBackend,
    B::Chart: AsRef<str>,
{
    /// Render the hosting page: placeholder while Loading, chart and summary once Ready
    pub fn render_page(&self) -> Result<String, WidgetError> {
        let page = match self.phase {
            Phase::Loading => DashboardPage::loading(),
            Phase::Ready => DashboardPage::ready(
                self.summary.as_ref(),
                self.chart.current().map(|chart| chart.as_ref()),
            ),
        };
        Ok(page.render()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::slot::tests::CountingBackend;
    use crate::chart::SvgChartBackend;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedSource {
        outcome: fn() -> Result<Vec<Request>, FetchError>,
        calls: AtomicUsize,
    }

    impl FixedSource {
        fn new(outcome: fn() -> Result<Vec<Request>, FetchError>) -> Self {
            Self {
                outcome,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl RequestSource for FixedSource {
        async fn fetch_requests(&self) -> Result<Vec<Request>, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            (self.outcome)()
        }
    }

    fn sample() -> Result<Vec<Request>, FetchError> {
        Ok(vec![
            Request::new("A", "H1"),
            Request::new("B", "H2"),
            Request::new("A", "H1"),
        ])
    }

    fn unreachable_endpoint() -> Result<Vec<Request>, FetchError> {
        Err(FetchError::Status {
            status: 502,
            body: "bad gateway".to_string(),
        })
    }

    fn empty() -> Result<Vec<Request>, FetchError> {
        Ok(Vec::new())
    }

    #[test]
    fn test_initial_state() {
        let widget = RequestsWidget::new(CountingBackend::default());
        assert_eq!(widget.phase(), Phase::Loading);
        assert!(widget.summary().is_none());
        assert!(widget.chart().is_none());
        assert!(widget.requests().is_empty());
    }

    #[tokio::test]
    async fn test_mount_success() {
        let mut widget = RequestsWidget::new(CountingBackend::default());
        widget.mount(&FixedSource::new(sample)).await.unwrap();

        assert_eq!(widget.phase(), Phase::Ready);
        let summary = widget.summary().unwrap();
        assert_eq!(summary.total_requests, 3);
        assert_eq!(summary.unique_departments, vec!["A", "B"]);
        assert_eq!(summary.requests_per_hotel.labels(), vec!["H1", "H2"]);
        assert_eq!(widget.chart().unwrap().labels, vec!["H1", "H2"]);
        assert_eq!(widget.chart_stats(), ChartStats { created: 1, destroyed: 0 });
        assert!(widget.updated_at().is_some());
    }

    #[tokio::test]
    async fn test_fetch_failure_stays_loading() {
        let backend = CountingBackend::default();
        let mut widget = RequestsWidget::new(backend.clone());
        widget.mount(&FixedSource::new(unreachable_endpoint)).await.unwrap();

        assert_eq!(widget.phase(), Phase::Loading);
        assert!(widget.chart().is_none());
        assert_eq!(widget.chart_stats().created, 0);
        assert_eq!(backend.live.load(Ordering::SeqCst), 0);

        // No second attempt for this mount
        let source = FixedSource::new(sample);
        widget.mount(&source).await.unwrap();
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
        assert!(widget.is_loading());
    }

    #[tokio::test]
    async fn test_empty_list_is_ready_without_summary() {
        let mut widget = RequestsWidget::new(CountingBackend::default());
        widget.mount(&FixedSource::new(empty)).await.unwrap();

        assert_eq!(widget.phase(), Phase::Ready);
        assert!(widget.summary().is_none());
        assert!(widget.chart().is_none());
        assert_eq!(widget.chart_stats().created, 0);
    }

    #[tokio::test]
    async fn test_empty_replacement_keeps_previous_view() {
        let mut widget = RequestsWidget::new(CountingBackend::default());
        widget.mount(&FixedSource::new(sample)).await.unwrap();

        widget.replace_requests(Vec::new()).unwrap();

        assert!(widget.requests().is_empty());
        assert_eq!(widget.summary().unwrap().total_requests, 3);
        assert!(widget.chart().is_some());
        assert_eq!(widget.chart_stats().created, 1);
    }

    #[test]
    fn test_n_updates_create_n_destroy_n_minus_one() {
        let backend = CountingBackend::default();
        let mut widget = RequestsWidget::new(backend.clone());
        assert!(widget.begin_mount());
        widget
            .apply_fetch(Ok(vec![Request::new("D", "H0")]))
            .unwrap();

        let n = 6u64;
        for i in 1..n {
            widget
                .replace_requests(vec![Request::new("D", format!("H{}", i))])
                .unwrap();
            assert_eq!(backend.live.load(Ordering::SeqCst), 1);
        }

        assert_eq!(widget.chart_stats(), ChartStats { created: n, destroyed: n - 1 });
        assert_eq!(backend.peak.load(Ordering::SeqCst), 1);
        assert_eq!(widget.chart().unwrap().labels, vec!["H5"]);
    }

    #[test]
    fn test_replace_before_ready_is_rejected() {
        let mut widget = RequestsWidget::new(CountingBackend::default());
        assert!(matches!(
            widget.replace_requests(vec![Request::new("D", "H1")]),
            Err(WidgetError::NotReady)
        ));
        assert!(widget.chart().is_none());
    }

    #[test]
    fn test_late_response_after_unmount_is_discarded() {
        let backend = CountingBackend::default();
        let mut widget = RequestsWidget::new(backend.clone());
        assert!(widget.begin_mount());

        widget.unmount();
        widget.apply_fetch(sample()).unwrap();

        assert!(widget.is_torn_down());
        assert_eq!(widget.phase(), Phase::Loading);
        assert!(widget.requests().is_empty());
        assert_eq!(backend.live.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_unmount_releases_chart() {
        let backend = CountingBackend::default();
        let mut widget = RequestsWidget::new(backend.clone());
        assert!(widget.begin_mount());
        widget.apply_fetch(sample()).unwrap();
        assert_eq!(backend.live.load(Ordering::SeqCst), 1);

        widget.unmount();
        assert_eq!(backend.live.load(Ordering::SeqCst), 0);
        assert!(!widget.begin_mount());
        assert!(matches!(
            widget.replace_requests(vec![Request::new("D", "H1")]),
            Err(WidgetError::NotReady)
        ));
    }

    #[test]
    fn test_chart_failure_surfaces_as_error() {
        let backend = CountingBackend::default();
        backend.fail.store(true, Ordering::SeqCst);
        let mut widget = RequestsWidget::new(backend);
        assert!(widget.begin_mount());

        assert!(matches!(
            widget.apply_fetch(sample()),
            Err(WidgetError::Chart(_))
        ));
        assert_eq!(widget.phase(), Phase::Ready);
    }

    #[tokio::test]
    async fn test_dropping_mount_future_cancels_fetch() {
        struct PendingSource;

        #[async_trait]
        impl RequestSource for PendingSource {
            async fn fetch_requests(&self) -> Result<Vec<Request>, FetchError> {
                std::future::pending().await
            }
        }

        let mut widget = RequestsWidget::new(CountingBackend::default());
        tokio::select! {
            _ = widget.mount(&PendingSource) => unreachable!("pending source resolved"),
            _ = tokio::task::yield_now() => {}
        }

        assert!(widget.is_loading());
        assert!(widget.chart().is_none());
    }

    #[tokio::test]
    async fn test_render_page_phases() {
        let mut widget = RequestsWidget::new(SvgChartBackend::default());
        assert!(widget.render_page().unwrap().contains("Loading..."));

        widget.mount(&FixedSource::new(sample)).await.unwrap();
        let html = widget.render_page().unwrap();
        assert!(html.contains("Total Requests: 3"));
        assert!(html.contains("<li>A</li>"));
        assert!(html.contains("<svg"));
        assert!(!html.contains("Loading..."));
    }
}
