// Axis ranges, date label formatting and line segmentation

use crate::anomaly::date_from_chart;

/// Padding added on both sides of the date axis, in days.
pub const X_MARGIN_DAYS: f64 = 0.0005;

/// `[first - margin, last + margin]`, or one day starting at the epoch when there is no data.
pub fn x_range(dates: &[f64]) -> (f64, f64) {
    match (dates.first(), dates.last()) {
        (Some(&first), Some(&last)) if first.is_finite() && last.is_finite() => {
            (first.min(last) - X_MARGIN_DAYS, first.max(last) + X_MARGIN_DAYS)
        }
        _ => (0.0, 1.0),
    }
}

/// Min/max of finite values padded by 5%; flat or empty data gets +-1.
pub fn y_range(values: &[f64]) -> (f64, f64) {
    let (min, max) = values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if !min.is_finite() {
        return (-1.0, 1.0);
    }
    if min == max {
        return (min - 1.0, max + 1.0);
    }
    let pad = (max - min) * 0.05;
    (min - pad, max + pad)
}

/// Tick label for a chart date; granularity follows the visible span (in days).
pub fn format_date_label(days: f64, span: f64) -> String {
    let Some(t) = date_from_chart(days) else {
        return String::new();
    };
    let fmt = if span >= 2.0 {
        "%Y-%m-%d"
    } else if span >= 1.0 / 24.0 {
        "%m-%d %H:%M"
    } else {
        "%H:%M:%S"
    };
    t.format(fmt).to_string()
}

/// Splits the series into runs of finite points so gaps are not bridged by the line.
pub fn finite_segments(dates: &[f64], values: &[f64]) -> Vec<Vec<(f64, f64)>> {
    let mut segments = Vec::new();
    let mut current = Vec::new();
    for (&x, &y) in dates.iter().zip(values) {
        if x.is_finite() && y.is_finite() {
            current.push((x, y));
        } else if !current.is_empty() {
            segments.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}
