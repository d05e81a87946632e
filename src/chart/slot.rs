//! Chart Slot
//!
//! Owns the drawing surface and the single live chart bound to it.

use serde::Serialize;

use super::backend::{ChartBackend, ChartError};
use super::config::LineChartConfig;

/// Lifetime counters of a slot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ChartStats {
    pub created: u64,
    pub destroyed: u64,
}

impl ChartStats {
    /// Charts currently alive (0 or 1)
    pub fn live(&self) -> u64 {
        self.created - self.destroyed
    }
}

/// Drawing surface plus at most one chart instance
pub struct ChartSlot<B: ChartBackend> {
    surface: B,
    current: Option<B::Chart>,
    stats: ChartStats,
}

impl<B: ChartBackend> ChartSlot<B> {
    pub fn new(surface: B) -> Self {
        Self {
            surface,
            current: None,
            stats: ChartStats::default(),
        }
    }

    /// Replace the live chart: release the previous instance, then paint a new one.
    ///
    /// If painting fails the slot is left empty.
    pub fn redraw(&mut self, config: &LineChartConfig) -> Result<&B::Chart, ChartError> {
        self.release();

        let chart = self.surface.create(config)?;
        self.stats.created += 1;
        Ok(&*self.current.insert(chart))
    }

    /// Destroy the live chart, if any
    pub fn release(&mut self) {
        if let Some(previous) = self.current.take() {
            self.surface.destroy(previous);
            self.stats.destroyed += 1;
        }
    }

    pub fn current(&self) -> Option<&B::Chart> {
        self.current.as_ref()
    }

    pub fn stats(&self) -> ChartStats {
        self.stats
    }
}

impl<B: ChartBackend> Drop for ChartSlot<B> {
    fn drop(&mut self) {
        self.release();
    }
}
