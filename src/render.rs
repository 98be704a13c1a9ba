//! Plotters-backed renderer for a [`ChartSpec`]. The chart is written as an
//! SVG and handed to the system viewer; `BENCHPLOT_OUTPUT` redirects it to a
//! fixed path instead (and skips the viewer), which is what the tests use.

use std::{
    env,
    path::{Path, PathBuf},
};

use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::element::ErrorBar;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use crate::{
    chart::{ChartSpec, X_AXIS_TITLE, Y_AXIS_MIN, Y_AXIS_TITLE},
    errors::BenchPlotError,
};

pub const OUTPUT_ENV: &str = "BENCHPLOT_OUTPUT";

const CHART_SIZE: (u32, u32) = (1280, 720);
const GROUP_WIDTH: f64 = 0.8;

/// Renders the chart and opens it in the system viewer. Returns the path the
/// SVG was written to.
pub fn display(spec: &ChartSpec) -> Result<PathBuf, BenchPlotError> {
    if let Ok(path) = env::var(OUTPUT_ENV) {
        let path = PathBuf::from(path);
        render_svg(spec, &path)?;
        return Ok(path);
    }
    let path = env::temp_dir().join("benchplot.svg");
    render_svg(spec, &path)?;
    open::that(&path)
        .map_err(|e| BenchPlotError::render(format!("cannot display {}: {e}", path.display())))?;
    Ok(path)
}

pub fn render_svg(spec: &ChartSpec, path: &Path) -> Result<(), BenchPlotError> {
    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    draw_chart(spec, &root).map_err(|e| BenchPlotError::render(e.to_string()))?;
    root.present()
        .map_err(|e| BenchPlotError::render(e.to_string()))
}

fn draw_chart<DB: DrawingBackend>(
    spec: &ChartSpec,
    root: &DrawingArea<DB, Shift>,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let labels = &spec.group_labels;
    let groups = labels.len();
    let x_min = -0.5;
    let x_max = groups as f64 - 0.5;

    let mut chart = ChartBuilder::on(root)
        .margin(20)
        .x_label_area_size(70)
        .y_label_area_size(80)
        .build_cartesian_2d(x_min..x_max, Y_AXIS_MIN..spec.y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(groups)
        .x_label_formatter(&|x: &f64| {
            let idx = x.round();
            if (x - idx).abs() < 1e-6 && idx >= 0.0 && (idx as usize) < groups {
                labels[idx as usize].clone()
            } else {
                String::new()
            }
        })
        .x_desc(X_AXIS_TITLE)
        .y_desc(Y_AXIS_TITLE)
        .axis_desc_style(("sans-serif", 18))
        .label_style(("sans-serif", 16))
        .draw()?;

    let bar_width = GROUP_WIDTH / spec.series.len() as f64;
    for (series_idx, series) in spec.series.iter().enumerate() {
        let color = RGBColor(series.color.0, series.color.1, series.color.2);
        let offset = -GROUP_WIDTH / 2.0 + bar_width * series_idx as f64;

        // Bars below parity collapse onto the y=1 line, same as a clipped view.
        let bars: Vec<_> = series
            .values
            .iter()
            .enumerate()
            .map(|(group, &value)| {
                let x0 = group as f64 + offset;
                let x1 = x0 + bar_width * 0.92;
                let top = value.clamp(Y_AXIS_MIN, spec.y_max);
                Rectangle::new([(x0, Y_AXIS_MIN), (x1, top)], color.filled())
            })
            .collect();
        chart
            .draw_series(bars)?
            .label(&series.mode)
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 6), (x + 12, y + 6)], color.filled())
            });

        let whiskers: Vec<_> = series
            .values
            .iter()
            .zip(&series.errors)
            .enumerate()
            .map(|(group, (&value, &error))| {
                let x = group as f64 + offset + bar_width * 0.46;
                let lo = (value - error).clamp(Y_AXIS_MIN, spec.y_max);
                let hi = (value + error).clamp(Y_AXIS_MIN, spec.y_max);
                let mid = value.clamp(lo, hi);
                ErrorBar::new_vertical(x, lo, mid, hi, ShapeStyle::from(&BLACK).stroke_width(1), 6)
            })
            .collect();
        chart.draw_series(whiskers)?;
    }

    // Baseline parity reference.
    chart.draw_series(LineSeries::new(
        [(x_min, Y_AXIS_MIN), (x_max, Y_AXIS_MIN)],
        &BLACK,
    ))?;

    // Per-mode geometric mean: dashed line in the series color, annotated
    // with the rounded value. Lines outside the axis range are not drawn.
    for series in &spec.series {
        let color = RGBColor(series.color.0, series.color.1, series.color.2);
        let gm = series.geometric_mean;
        if gm < Y_AXIS_MIN || gm > spec.y_max {
            continue;
        }
        chart.draw_series(DashedLineSeries::new(
            vec![(x_min, gm), (x_max, gm)],
            8,
            5,
            ShapeStyle::from(&color).stroke_width(3),
        ))?;
        let label_y = gm + 0.015 * (spec.y_max - Y_AXIS_MIN);
        chart.draw_series(std::iter::once(Text::new(
            format!("{:.1}", gm),
            (x_min + 0.05, label_y),
            ("sans-serif", 18).into_font().color(&color),
        )))?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .label_font(("sans-serif", 18))
        .draw()?;

    Ok(())
}
