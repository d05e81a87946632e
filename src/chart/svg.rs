//! SVG Drawing Surface
//!
//! Paints line charts with plotters into an in-memory SVG document.

use plotters::prelude::*;

use super::backend::{ChartBackend, ChartError};
use super::config::LineChartConfig;
use crate::config::ChartConfig;

/// Absolute backend pixel coordinate
type Pixel = (i32, i32);

/// Pixel size of the drawing surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl Default for SurfaceSize {
    fn default() -> Self {
        Self {
            width: 600,
            height: 300,
        }
    }
}

impl From<ChartConfig> for SurfaceSize {
    fn from(config: ChartConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
        }
    }
}

/// A rendered chart instance
#[derive(Debug, Clone)]
pub struct SvgChart {
    svg: String,
    config: LineChartConfig,
}

impl SvgChart {
    /// SVG markup of the painted chart
    pub fn svg(&self) -> &str {
        &self.svg
    }

    /// Configuration the chart was painted from
    pub fn config(&self) -> &LineChartConfig {
        &self.config
    }
}

impl AsRef<str> for SvgChart {
    fn as_ref(&self) -> &str {
        &self.svg
    }
}

/// plotters-backed SVG surface
#[derive(Debug, Clone, Default)]
pub struct SvgChartBackend {
    size: SurfaceSize,
}

impl SvgChartBackend {
    pub fn new(size: SurfaceSize) -> Self {
        Self { size }
    }

    fn paint(&self, config: &LineChartConfig) -> Result<String, ChartError> {
        let labels = &config.labels;
        let axis = config.y_axis;
        let draw_err = |e: DrawingAreaErrorKind<std::io::Error>| ChartError::Draw(e.to_string());

        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (self.size.width, self.size.height))
                .into_drawing_area();
            root.fill(&WHITE).map_err(draw_err)?;

            // One tick per category, the trailing segment stays unlabelled
            let categories = (0..labels.len())
                .with_key_points((0..labels.len()).collect())
                .into_segmented();

            let mut chart = ChartBuilder::on(&root)
                .margin(16)
                .x_label_area_size(36)
                .y_label_area_size(36)
                .build_cartesian_2d(categories, axis.min as f64..axis.max as f64)
                .map_err(draw_err)?;

            let label_at = |value: &SegmentValue<usize>| match value {
                SegmentValue::Exact(idx) | SegmentValue::CenterOf(idx) => {
                    labels.get(*idx).cloned().unwrap_or_default()
                }
                SegmentValue::Last => String::new(),
            };

            chart
                .configure_mesh()
                .disable_x_mesh()
                .x_labels(labels.len())
                .y_labels(axis.ticks().len())
                .x_label_formatter(&label_at)
                .y_label_formatter(&|y| format!("{:.0}", y))
                .draw()
                .map_err(draw_err)?;

            let top = chart
                .backend_coord(&(SegmentValue::CenterOf(0), axis.max as f64))
                .1;

            for dataset in &config.datasets {
                let border = to_color(dataset.border_color);
                let background = to_color(dataset.background_color);
                let line_style = ShapeStyle {
                    color: border,
                    filled: false,
                    stroke_width: dataset.border_width,
                };

                let pixels: Vec<Pixel> = dataset
                    .data
                    .iter()
                    .enumerate()
                    .map(|(idx, &value)| {
                        chart.backend_coord(&(SegmentValue::CenterOf(idx), value as f64))
                    })
                    .collect();

                for run in clip_below(&pixels, top) {
                    root.draw(&PathElement::new(run, line_style))
                        .map_err(draw_err)?;
                }

                // Legend entry only, the line itself is painted above
                chart
                    .draw_series(std::iter::empty::<PathElement<(SegmentValue<usize>, f64)>>())
                    .map_err(draw_err)?
                    .label(dataset.label.as_str())
                    .legend(move |(x, y)| {
                        PathElement::new(vec![(x, y), (x + 20, y)], border.stroke_width(3))
                    });

                chart
                    .draw_series(
                        dataset
                            .data
                            .iter()
                            .enumerate()
                            .filter(|(_, value)| axis.contains(**value as f64))
                            .map(|(idx, &value)| {
                                Circle::new(
                                    (SegmentValue::CenterOf(idx), value as f64),
                                    3,
                                    background.filled(),
                                )
                            }),
                    )
                    .map_err(draw_err)?;
            }

            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperRight)
                .background_style(&WHITE.mix(0.8))
                .border_style(&BLACK)
                .draw()
                .map_err(draw_err)?;

            root.present().map_err(draw_err)?;
        }

        Ok(svg)
    }
}

/// Split a pixel polyline into the runs lying on or below the `top` edge.
///
/// Segments crossing the edge are cut where they meet it, so values above the
/// axis leave the plot instead of being flattened onto its maximum.
fn clip_below(points: &[Pixel], top: i32) -> Vec<Vec<Pixel>> {
    let mut runs = Vec::new();
    let mut run: Vec<Pixel> = Vec::new();

    for (idx, &point) in points.iter().enumerate() {
        let visible = point.1 >= top;

        if let Some(&prev) = idx.checked_sub(1).and_then(|i| points.get(i)) {
            if (prev.1 >= top) != visible {
                run.push(crossing(prev, point, top));
                if !visible {
                    runs.push(std::mem::take(&mut run));
                }
            }
        }

        if visible {
            run.push(point);
        }
    }

    if !run.is_empty() {
        runs.push(run);
    }
    runs
}

/// Point where segment `a`-`b` meets the horizontal line `y`
fn crossing(a: Pixel, b: Pixel, y: i32) -> Pixel {
    let t = f64::from(y - a.1) / f64::from(b.1 - a.1);
    let x = f64::from(a.0) + t * f64::from(b.0 - a.0);
    (x.round() as i32, y)
}

fn to_color(color: super::config::Rgba) -> RGBAColor {
    RGBAColor(color.r, color.g, color.b, color.a)
}

impl ChartBackend for SvgChartBackend {
    type Chart = SvgChart;

    fn create(&self, config: &LineChartConfig) -> Result<SvgChart, ChartError> {
        if config.labels.is_empty() {
            return Err(ChartError::InvalidConfig(
                "cannot draw a chart without categories".to_string(),
            ));
        }
        if let Some(dataset) = config
            .datasets
            .iter()
            .find(|d| d.data.len() != config.labels.len())
        {
            return Err(ChartError::InvalidConfig(format!(
                "dataset '{}' has {} values for {} labels",
                dataset.label,
                dataset.data.len(),
                config.labels.len()
            )));
        }

        let svg = self.paint(config)?;
        tracing::debug!(
            categories = config.labels.len(),
            bytes = svg.len(),
            "Chart created"
        );

        Ok(SvgChart {
            svg,
            config: config.clone(),
        })
    }

    fn destroy(&self, chart: SvgChart) {
        tracing::debug!(categories = chart.config.labels.len(), "Chart destroyed");
        drop(chart);
    }
}
