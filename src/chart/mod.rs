// Anomaly chart rendering with plotters

pub mod axis;
pub mod encode;

use crate::error::RenderError;
use crate::models::{AnomalySeries, TelemetrySeries};
use plotters::prelude::*;
use plotters::style::FontTransform;

/// 13 x 6.5 inches at 100 dpi.
pub const CHART_WIDTH: u32 = 1300;
pub const CHART_HEIGHT: u32 = 650;
pub const CHART_TITLE: &str = "Anomalies Detected";
const MARKER_RADIUS: i32 = 7;

fn draw_err(e: impl std::fmt::Display) -> RenderError {
    RenderError::Draw(e.to_string())
}

/// Draws the full series as a thin black line and overlays anomalies as red dots.
/// Returns a packed RGB buffer of `CHART_WIDTH * CHART_HEIGHT * 3` bytes.
pub fn render_rgb(
    series: &TelemetrySeries,
    anomalies: &AnomalySeries,
) -> Result<Vec<u8>, RenderError> {
    let mut buf = vec![0u8; (CHART_WIDTH * CHART_HEIGHT * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buf, (CHART_WIDTH, CHART_HEIGHT))
            .into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;

        let (x_min, x_max) = axis::x_range(&series.dates);
        let (y_min, y_max) = axis::y_range(&series.values);
        let span = x_max - x_min;

        let mut chart = ChartBuilder::on(&root)
            .caption(CHART_TITLE, ("sans-serif", 28))
            .margin(20)
            .x_label_area_size(110)
            .y_label_area_size(70)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)
            .map_err(draw_err)?;

        chart
            .configure_mesh()
            .x_labels(12)
            .y_labels(10)
            .x_label_formatter(&|x| axis::format_date_label(*x, span))
            .x_label_style(
                ("sans-serif", 14)
                    .into_font()
                    .transform(FontTransform::Rotate90),
            )
            .y_label_style(("sans-serif", 14).into_font())
            .draw()
            .map_err(draw_err)?;

        for segment in axis::finite_segments(&series.dates, &series.values) {
            chart
                .draw_series(LineSeries::new(segment, BLACK.stroke_width(1)))
                .map_err(draw_err)?;
        }

        chart
            .draw_series(
                anomalies
                    .points()
                    .filter(|p| p.date.is_finite() && p.value.is_finite())
                    .map(|p| Circle::new((p.date, p.value), MARKER_RADIUS, RED.filled())),
            )
            .map_err(draw_err)?;

        root.present().map_err(draw_err)?;
    }
    Ok(buf)
}

pub fn render_jpeg(
    series: &TelemetrySeries,
    anomalies: &AnomalySeries,
) -> Result<Vec<u8>, RenderError> {
    let rgb = render_rgb(series, anomalies)?;
    encode::encode_jpeg(rgb, CHART_WIDTH, CHART_HEIGHT)
}

/// Renders off the async runtime and returns the JPEG as base64 text.
pub async fn render_base64(
    series: TelemetrySeries,
    anomalies: AnomalySeries,
) -> Result<String, RenderError> {
    let jpeg = tokio::task::spawn_blocking(move || render_jpeg(&series, &anomalies)).await??;
    tracing::debug!(bytes = jpeg.len(), "chart encoded");
    Ok(encode::to_base64(&jpeg))
}
