// Chart rendering and encoding

use anomaly_chart::anomaly::{build_series, select_anomalies};
use anomaly_chart::chart::{CHART_HEIGHT, CHART_WIDTH, render_base64, render_jpeg, render_rgb};
use anomaly_chart::models::{AnomalySeries, TelemetrySeries, WideRow};
use base64::Engine as _;

const JPEG_SOI: [u8; 3] = [0xFF, 0xD8, 0xFF];

fn five_points() -> (TelemetrySeries, AnomalySeries) {
    let row = WideRow {
        telemetry_series: vec![10.0, 11.5, 9.8, 42.0, 10.2],
        event_time: (0..5)
            .map(|m| format!("2021-06-01T12:{:02}:00.0000000Z", m))
            .collect(),
        true_anomalies: vec![0.0, 0.0, 0.0, 1.0, 0.0],
    };
    build_series(&row).unwrap()
}

#[test]
fn test_render_rgb_fills_whole_canvas() {
    let (series, anomalies) = five_points();
    let rgb = render_rgb(&series, &anomalies).unwrap();
    assert_eq!(rgb.len(), (CHART_WIDTH * CHART_HEIGHT * 3) as usize);
    // Background is white, and something (line, text, markers) was drawn on it.
    assert_eq!(&rgb[..3], &[255, 255, 255]);
    assert!(rgb.iter().any(|&b| b < 128));
}

#[test]
fn test_anomaly_markers_are_red() {
    let (series, anomalies) = five_points();
    let rgb = render_rgb(&series, &anomalies).unwrap();
    let has_red = rgb
        .chunks_exact(3)
        .any(|px| px[0] > 200 && px[1] < 60 && px[2] < 60);
    assert!(has_red);
}

#[test]
fn test_render_jpeg_has_magic_bytes() {
    let (series, anomalies) = five_points();
    let jpeg = render_jpeg(&series, &anomalies).unwrap();
    assert_eq!(&jpeg[..3], &JPEG_SOI);
}

#[test]
fn test_empty_series_renders_empty_axes() {
    let jpeg = render_jpeg(&TelemetrySeries::default(), &AnomalySeries::default()).unwrap();
    assert_eq!(&jpeg[..3], &JPEG_SOI);
}

#[test]
fn test_single_point_and_gaps_render() {
    let series = TelemetrySeries {
        dates: vec![18779.5, 18779.6, 18779.7],
        values: vec![1.0, f64::NAN, 3.0],
    };
    let anomalies = select_anomalies(&series.values, &series.dates, &[0.0, 1.0, 1.0]);
    assert!(render_jpeg(&series, &anomalies).is_ok());

    let one = TelemetrySeries {
        dates: vec![18779.5],
        values: vec![4.0],
    };
    assert!(render_jpeg(&one, &AnomalySeries::default()).is_ok());
}

#[tokio::test]
async fn test_render_base64_decodes_to_jpeg() {
    let (series, anomalies) = five_points();
    let encoded = render_base64(series, anomalies).await.unwrap();
    assert!(!encoded.is_empty());
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .unwrap();
    assert_eq!(&bytes[..3], &JPEG_SOI);
}
