//! Line Chart Configuration
//!
//! Backend-independent description of the requests-per-hotel chart.

use serde::Serialize;

use crate::aggregate::HotelCounts;

/// Heading rendered above the chart
pub const CHART_TITLE: &str = "Request Per Hotel";

/// Legend label of the single dataset
pub const DATASET_LABEL: &str = "Number of Requests";

/// Chart type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
}

/// RGBA color with alpha in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// CSS `rgba(...)` notation
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Fixed numeric axis range with a constant tick step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AxisScale {
    pub min: i64,
    pub max: i64,
    pub step: i64,
}

impl AxisScale {
    /// Y axis of the requests chart: 0..=8, ticks every 2
    pub const REQUESTS: AxisScale = AxisScale {
        min: 0,
        max: 8,
        step: 2,
    };

    /// Tick values from `min` to `max` inclusive
    pub fn ticks(&self) -> Vec<i64> {
        if self.step <= 0 || self.max < self.min {
            return vec![self.min];
        }
        (self.min..=self.max).step_by(self.step as usize).collect()
    }

    /// Whether `value` lies inside the visible range.
    ///
    /// Values outside it are still plotted but fall off the painted area;
    /// the axis itself never grows to fit them.
    pub fn contains(&self, value: f64) -> bool {
        (self.min as f64..=self.max as f64).contains(&value)
    }
}

/// One plotted series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<u64>,
    pub background_color: Rgba,
    pub border_color: Rgba,
    pub border_width: u32,
    pub fill: bool,
}

/// Complete chart description handed to a [`ChartBackend`](super::ChartBackend)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChartConfig {
    pub kind: ChartKind,
    pub title: String,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub y_axis: AxisScale,
}

impl LineChartConfig {
    /// Requests-per-hotel chart: one category per hotel, fixed styling and
    /// a y axis that never follows the data
    pub fn requests_per_hotel(counts: &HotelCounts) -> Self {
        Self {
            kind: ChartKind::Line,
            title: CHART_TITLE.to_string(),
            labels: counts.labels(),
            datasets: vec![Dataset {
                label: DATASET_LABEL.to_string(),
                data: counts.counts(),
                background_color: Rgba::new(75, 192, 192, 0.4),
                border_color: Rgba::new(75, 192, 192, 1.0),
                border_width: 7,
                fill: false,
            }],
            y_axis: AxisScale::REQUESTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::requests_per_hotel;
    use crate::requests::Request;

    fn counts_for(codes: &[&str]) -> HotelCounts {
        let requests: Vec<Request> = codes.iter().map(|c| Request::new("D", *c)).collect();
        requests_per_hotel(&requests)
    }

    #[test]
    fn test_dataset_follows_label_order() {
        let counts = counts_for(&["H1", "H2", "H1", "H3", "H3", "H3"]);
        let config = LineChartConfig::requests_per_hotel(&counts);

        assert_eq!(config.kind, ChartKind::Line);
        assert_eq!(config.labels, vec!["H1", "H2", "H3"]);
        assert_eq!(config.datasets.len(), 1);
        assert_eq!(config.datasets[0].data, vec![2, 1, 3]);
        for (label, value) in config.labels.iter().zip(&config.datasets[0].data) {
            assert_eq!(counts.get(label), Some(*value));
        }
    }

    #[test]
    fn test_fixed_styling() {
        let config = LineChartConfig::requests_per_hotel(&counts_for(&["H1"]));
        let dataset = &config.datasets[0];

        assert_eq!(config.title, "Request Per Hotel");
        assert_eq!(dataset.label, "Number of Requests");
        assert_eq!(dataset.background_color.to_css(), "rgba(75, 192, 192, 0.4)");
        assert_eq!(dataset.border_color.to_css(), "rgba(75, 192, 192, 1)");
        assert_eq!(dataset.border_width, 7);
        assert!(!dataset.fill);
    }

    #[test]
    fn test_y_axis_ignores_data_magnitude() {
        let codes: Vec<&str> = std::iter::repeat("BIG").take(25).chain(["SMALL"]).collect();
        let config = LineChartConfig::requests_per_hotel(&counts_for(&codes));

        assert_eq!(config.datasets[0].data, vec![25, 1]);
        assert_eq!(
            config.y_axis,
            AxisScale {
                min: 0,
                max: 8,
                step: 2
            }
        );
        assert_eq!(config.y_axis.ticks(), vec![0, 2, 4, 6, 8]);
    }

    #[test]
    fn test_axis_contains() {
        let axis = AxisScale::REQUESTS;
        assert!(axis.contains(0.0));
        assert!(axis.contains(8.0));
        assert!(!axis.contains(25.0));
        assert!(!axis.contains(-1.0));
    }
}
