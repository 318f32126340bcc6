//! Comparison plot rendering.
//!
//! Three charts are produced from the aggregated series:
//!
//! - **Scatter (with timeouts)**: log-log candidate vs baseline times, one
//!   color for realizable benchmarks and one for unrealizable ones, square
//!   aspect, axis limits `[0.5×min, 5×max]` over all series.
//! - **Scatter (no timeouts)**: same chart after dropping every pair where
//!   either side is the timeout value, limits `[0.5×min, 1.5×max]`, diagonal
//!   drawn up to the timeout value.
//! - **Quantile plot**: per-algorithm sorted solve times (timeouts dropped)
//!   against the number of benchmarks solved.
//!
//! The backend renders SVG; paths are supplied by the driver.

use crate::aggregate::Aggregation;
use crate::config::ReportConfig;
use crate::error::{ReportError, Result};
use plotters::element::{Cross, PathElement};
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use std::path::Path;

const FIREBRICK: RGBColor = RGBColor(178, 34, 34);
const PURPLE: RGBColor = RGBColor(128, 0, 128);
const DARK_ORANGE: RGBColor = RGBColor(255, 140, 0);
const GREY: RGBColor = RGBColor(128, 128, 128);

/// Scatter chart edge length in pixels (square aspect).
const SCATTER_SIZE: u32 = 400;

/// Quantile chart dimensions in pixels.
const QUANTILE_SIZE: (u32, u32) = (600, 400);

fn plot_err<E: std::fmt::Display>(e: E) -> ReportError {
    ReportError::Plot(e.to_string())
}

/// Axis limits over `values`, scaled by the given factors and clamped to
/// stay positive for log axes. Falls back to a fixed window when no points
/// exist so an empty input still renders a valid (empty) chart.
fn axis_range(values: impl Iterator<Item = f64>, lo_factor: f64, hi_factor: f64) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if !min.is_finite() || !max.is_finite() {
        return (0.1, 1000.0);
    }
    let lo = (lo_factor * min).max(1e-3);
    let hi = (hi_factor * max).max(lo * 10.0);
    (lo, hi)
}

fn paired(series: &crate::aggregate::SeriesSet) -> Vec<(f64, f64)> {
    series
        .baseline
        .iter()
        .zip(series.candidate.iter())
        .map(|(&b, &c)| (b, c))
        .collect()
}

/// Renderer for the three comparison charts.
pub struct PlotRenderer {
    timeout_value: f64,
    font_size: u32,
}

impl PlotRenderer {
    /// Build a renderer from the run configuration.
    pub fn new(config: &ReportConfig) -> Self {
        Self {
            timeout_value: config.timeout_value,
            font_size: config.plot_font_size,
        }
    }

    fn draw_scatter(
        &self,
        path: &Path,
        realizable: &[(f64, f64)],
        unrealizable: &[(f64, f64)],
        range: (f64, f64),
        diagonal_hi: f64,
        x_desc: &str,
        y_desc: &str,
    ) -> Result<()> {
        let (lo, hi) = range;
        let root = SVGBackend::new(path, (SCATTER_SIZE, SCATTER_SIZE)).into_drawing_area();
        root.fill(&WHITE).map_err(plot_err)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(20)
            .x_label_area_size(45)
            .y_label_area_size(45)
            .build_cartesian_2d((lo..hi).log_scale(), (lo..hi).log_scale())
            .map_err(plot_err)?;

        chart
            .configure_mesh()
            .x_desc(x_desc)
            .y_desc(y_desc)
            .axis_desc_style(("sans-serif", self.font_size))
            .label_style(("sans-serif", self.font_size.saturating_sub(2)))
            .draw()
            .map_err(plot_err)?;

        chart
            .draw_series(
                realizable
                    .iter()
                    .map(|&(x, y)| Cross::new((x, y), 4, FIREBRICK)),
            )
            .map_err(plot_err)?;
        chart
            .draw_series(
                unrealizable
                    .iter()
                    .map(|&(x, y)| Cross::new((x, y), 4, BLUE)),
            )
            .map_err(plot_err)?;

        let diag_hi = diagonal_hi.max(lo);
        chart
            .draw_series(DashedLineSeries::new(
                [(lo, lo), (diag_hi, diag_hi)],
                3,
                5,
                ShapeStyle::from(&GREY),
            ))
            .map_err(plot_err)?;

        root.present().map_err(plot_err)?;
        Ok(())
    }

    /// Scatter plot of candidate vs baseline times, timeouts included.
    pub fn scatter_with_timeouts(&self, path: &Path, agg: &Aggregation) -> Result<()> {
        let realizable = paired(&agg.realizable);
        let unrealizable = paired(&agg.unrealizable);

        let all = realizable
            .iter()
            .chain(unrealizable.iter())
            .flat_map(|&(x, y)| [x, y]);
        let range = axis_range(all, 0.5, 5.0);

        self.draw_scatter(
            path,
            &realizable,
            &unrealizable,
            range,
            range.1,
            "Synthesis time using SEGIS baseline (log)",
            "Synthesis time using SE²GIS (log)",
        )
    }

    /// Scatter plot restricted to pairs where neither side timed out.
    pub fn scatter_no_timeouts(&self, path: &Path, agg: &Aggregation) -> Result<()> {
        let keep =
            |&&(x, y): &&(f64, f64)| x != self.timeout_value && y != self.timeout_value;
        let realizable: Vec<(f64, f64)> =
            paired(&agg.realizable).iter().filter(keep).copied().collect();
        let unrealizable: Vec<(f64, f64)> =
            paired(&agg.unrealizable).iter().filter(keep).copied().collect();

        let all = realizable
            .iter()
            .chain(unrealizable.iter())
            .flat_map(|&(x, y)| [x, y]);
        let range = axis_range(all, 0.5, 1.5);

        self.draw_scatter(
            path,
            &realizable,
            &unrealizable,
            range,
            self.timeout_value.min(range.1),
            "Synthesis time using SEGIS (log)",
            "Synthesis time using SE²GIS (log)",
        )
    }

    /// Quantile plot: sorted solve times against benchmarks solved.
    pub fn quantile(&self, path: &Path, agg: &Aggregation) -> Result<()> {
        let solved = |series: &[f64], extra: &[f64]| -> Vec<f64> {
            let mut combined: Vec<f64> = series
                .iter()
                .chain(extra.iter())
                .copied()
                .filter(|&v| v < self.timeout_value)
                .collect();
            combined.sort_by(|a, b| a.total_cmp(b));
            combined
        };

        let candidate = solved(&agg.realizable.candidate, &agg.unrealizable.candidate);
        let baseline = solved(&agg.realizable.baseline, &agg.unrealizable.baseline);

        let x_max = candidate.len().max(baseline.len()).max(1) as f64;
        let y_max = candidate
            .iter()
            .chain(baseline.iter())
            .copied()
            .fold(1.0_f64, f64::max)
            * 1.05;

        let root = SVGBackend::new(path, QUANTILE_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(plot_err)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(20)
            .x_label_area_size(45)
            .y_label_area_size(50)
            .build_cartesian_2d(0.0..x_max, 0.0..y_max)
            .map_err(plot_err)?;

        chart
            .configure_mesh()
            .x_desc("Number of benchmarks solved")
            .y_desc("Time")
            .axis_desc_style(("sans-serif", self.font_size))
            .label_style(("sans-serif", self.font_size.saturating_sub(2)))
            .draw()
            .map_err(plot_err)?;

        chart
            .draw_series(LineSeries::new(
                candidate
                    .iter()
                    .enumerate()
                    .map(|(i, &v)| (i as f64, v)),
                PURPLE.stroke_width(2),
            ))
            .map_err(plot_err)?
            .label("SE²GIS")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], PURPLE.stroke_width(2)));

        chart
            .draw_series(LineSeries::new(
                baseline.iter().enumerate().map(|(i, &v)| (i as f64, v)),
                DARK_ORANGE.stroke_width(2),
            ))
            .map_err(plot_err)?
            .label("SEGIS (baseline)")
            .legend(|(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], DARK_ORANGE.stroke_width(2))
            });

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", self.font_size))
            .draw()
            .map_err(plot_err)?;

        root.present().map_err(plot_err)?;
        Ok(())
    }
}
