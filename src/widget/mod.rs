//! Requests Widget
//!
//! The dashboard component: one fetch on mount, aggregation on every
//! request-list change and a chart that is recreated on each redraw.
//!
//! # States
//!
//! ```text
//! Loading --(fetch ok)--> Ready --(requests replaced)--> Ready
//!    |
//!    +--(fetch failed)--> Loading (logged, never leaves)
//! ```

pub mod state;
pub mod view;

pub use state::{Phase, RequestsWidget};
pub use view::{DashboardPage, SummaryResponse};

use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::chart::{ChartBackend, ChartError};
use crate::requests::RequestSource;

/// Widget shared between the mount task and the hosting view
pub type SharedWidget<B> = Arc<RwLock<RequestsWidget<B>>>;

/// Mount a shared widget: claim the single fetch, run it without holding the
/// lock, then apply the outcome.
///
/// Readers keep seeing the Loading state while the request is in flight.
pub async fn mount_shared<B, S>(widget: &SharedWidget<B>, source: &S) -> Result<(), WidgetError>
where
    B: ChartBackend,
    S: RequestSource + ?Sized,
{
    if !widget.write().await.begin_mount() {
        return Ok(());
    }

    let outcome = source.fetch_requests().await;
    widget.write().await.apply_fetch(outcome)
}

/// Widget errors
#[derive(Error, Debug)]
pub enum WidgetError {
    /// The request list can only be replaced once the widget is Ready
    #[error("Widget is not ready")]
    NotReady,

    #[error("Chart error: {0}")]
    Chart(#[from] ChartError),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::slot::tests::CountingBackend;
    use crate::requests::{FetchError, Request};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Notify;

    /// Source that waits for a go signal before answering
    struct GatedSource {
        gate: Arc<Notify>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl RequestSource for GatedSource {
        async fn fetch_requests(&self) -> Result<Vec<Request>, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.gate.notified().await;
            Ok(vec![Request::new("A", "H1"), Request::new("B", "H1")])
        }
    }

    #[tokio::test]
    async fn test_mount_shared_does_not_block_readers() {
        let widget: SharedWidget<CountingBackend> =
            Arc::new(RwLock::new(RequestsWidget::new(CountingBackend::default())));
        let source = Arc::new(GatedSource {
            gate: Arc::new(Notify::new()),
            calls: AtomicUsize::new(0),
        });

        let task = {
            let widget = Arc::clone(&widget);
            let source = Arc::clone(&source);
            tokio::spawn(async move { mount_shared(&widget, source.as_ref()).await })
        };

        // Fetch in flight: the page still renders the placeholder
        while source.calls.load(Ordering::SeqCst) == 0 {
            tokio::task::yield_now().await;
        }
        assert!(widget.read().await.is_loading());
        assert!(widget.read().await.render_page().unwrap().contains("Loading..."));

        source.gate.notify_one();
        task.await.unwrap().unwrap();

        let widget = widget.read().await;
        assert_eq!(widget.phase(), Phase::Ready);
        assert_eq!(widget.summary().unwrap().total_requests, 2);
        assert_eq!(widget.chart_stats().created, 1);
    }

    #[tokio::test]
    async fn test_mount_shared_fetches_once() {
        let widget: SharedWidget<CountingBackend> =
            Arc::new(RwLock::new(RequestsWidget::new(CountingBackend::default())));
        let source = GatedSource {
            gate: Arc::new(Notify::new()),
            calls: AtomicUsize::new(0),
        };
        source.gate.notify_one();

        mount_shared(&widget, &source).await.unwrap();
        mount_shared(&widget, &source).await.unwrap();

        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        assert_eq!(widget.read().await.chart_stats().created, 1);
    }
}
