//! Requests Chart
//!
//! Line chart configuration, the drawing-surface abstraction and the slot
//! that owns the single live chart instance.
//!
//! # Lifecycle
//!
//! ```text
//! redraw #1:            create(c1)
//! redraw #2: destroy(c1) -> create(c2)
//! redraw #3: destroy(c2) -> create(c3)
//! ```
//!
//! The previous instance is always released before the next one is
//! acquired, so at most one chart is alive at any time.

pub mod backend;
pub mod config;
pub mod slot;
pub mod svg;

pub use backend::{ChartBackend, ChartError};
pub use config::{AxisScale, ChartKind, Dataset, LineChartConfig, Rgba};
pub use slot::{ChartSlot, ChartStats};
pub use svg::{SurfaceSize, SvgChart, SvgChartBackend};
