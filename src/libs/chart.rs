//! SVG chart rendering for the reshaped matrix.
//!
//! Draws a time-series chart with the date column on the x axis (tick labels
//! as `YYYY-MM-DD`) and one line per user column, with a legend of user
//! names. An empty matrix produces a blank canvas rather than an error.

use crate::libs::reshape::ColumnarMatrix;
use anyhow::Result;
use chrono::Duration;
use plotters::prelude::*;
use std::path::Path;

/// Output dimensions of the rendered SVG, in pixels.
pub const CHART_SIZE: (u32, u32) = (1024, 600);

/// Renders the matrix to an SVG file at `output`.
pub fn render(matrix: &ColumnarMatrix, output: &Path, caption: &str) -> Result<()> {
    let root = SVGBackend::new(output, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let (Some(&min_date), Some(&max_date)) = (matrix.dates.first(), matrix.dates.last()) else {
        // Empty dataset renders an empty chart, not an error.
        root.present()?;
        return Ok(());
    };

    // A single-day range would collapse the x axis to a point; pad it.
    let axis_max = if min_date == max_date { max_date + Duration::days(1) } else { max_date };
    let max_seconds = matrix.max_seconds().max(1);

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(caption, ("sans-serif", 20))
        .x_label_area_size(60)
        .y_label_area_size(90)
        .build_cartesian_2d(min_date..axis_max, 0u64..max_seconds)?;
    chart
        .configure_mesh()
        .x_desc("Date")
        .y_desc("Seconds")
        .x_label_formatter(&|date| date.format("%Y-%m-%d").to_string())
        .draw()?;

    for (idx, column) in matrix.columns.iter().enumerate() {
        let color = Palette99::pick(idx).mix(0.9);
        let points = matrix.dates.iter().copied().zip(column.values.iter().copied());
        chart
            .draw_series(LineSeries::new(points, color.stroke_width(3)))?
            .label(&column.user)
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled()));
    }

    if !matrix.columns.is_empty() {
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
    }

    root.present()?;
    Ok(())
}
