// Timestamp parsing and anomaly selection. Pure functions, no I/O.

use chrono::{DateTime, NaiveDateTime, Timelike};

use crate::error::{EventTimeError, SeriesError};
use crate::models::{AnomalyPoint, AnomalySeries, TelemetrySeries, WideRow};

/// Event-time layout. `%f` is 1 to 6 fraction digits, right-padded to microseconds, and
/// must be followed by a literal `0Z` (e.g. `2021-06-01T12:00:00.1234560Z`, `...:00.50Z`).
pub const EVENT_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S.%f0Z";

const SECONDS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const MAX_FRACTION_DIGITS: usize = 6;
const MICROS_PER_DAY: f64 = 86_400_000_000.0;

pub fn parse_event_time(s: &str) -> Result<NaiveDateTime, EventTimeError> {
    let (head, tail) = s.rsplit_once('.').ok_or(EventTimeError::MissingFraction)?;
    let digits = tail.strip_suffix("0Z").ok_or(EventTimeError::Fraction)?;
    if digits.is_empty()
        || digits.len() > MAX_FRACTION_DIGITS
        || !digits.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(EventTimeError::Fraction);
    }
    let micros: u32 = format!("{:0<width$}", digits, width = MAX_FRACTION_DIGITS)
        .parse()
        .map_err(|_| EventTimeError::Fraction)?;
    let whole = NaiveDateTime::parse_from_str(head, SECONDS_FORMAT)?;
    whole
        .with_nanosecond(micros * 1_000)
        .ok_or(EventTimeError::Fraction)
}

/// Fractional days since 1970-01-01T00:00:00.
pub fn chart_date(t: NaiveDateTime) -> f64 {
    t.and_utc().timestamp_micros() as f64 / MICROS_PER_DAY
}

/// Inverse of [`chart_date`], rounded to the microsecond.
pub fn date_from_chart(days: f64) -> Option<NaiveDateTime> {
    if !days.is_finite() {
        return None;
    }
    DateTime::from_timestamp_micros((days * MICROS_PER_DAY).round() as i64).map(|d| d.naive_utc())
}

/// Parses every event time; the first malformed one aborts the whole request.
pub fn parse_chart_dates(event_times: &[String]) -> Result<Vec<f64>, SeriesError> {
    event_times
        .iter()
        .enumerate()
        .map(|(index, s)| {
            parse_event_time(s)
                .map(chart_date)
                .map_err(|source| SeriesError::Timestamp {
                    index,
                    value: s.clone(),
                    format: EVENT_TIME_FORMAT,
                    source,
                })
        })
        .collect()
}

/// Single forward pass: keeps (date, value) wherever the flag is nonzero, in index order.
/// All three slices must have the same length.
pub fn select_anomalies(values: &[f64], dates: &[f64], flags: &[f64]) -> AnomalySeries {
    debug_assert_eq!(values.len(), dates.len(), "values and dates differ in length");
    debug_assert_eq!(values.len(), flags.len(), "values and flags differ in length");
    let mut out = AnomalySeries::default();
    for ((&value, &date), &flag) in values.iter().zip(dates).zip(flags) {
        if flag != 0.0 {
            out.push(AnomalyPoint { date, value });
        }
    }
    out
}

/// Full series plus its anomaly subset, ready to chart.
pub fn build_series(row: &WideRow) -> Result<(TelemetrySeries, AnomalySeries), SeriesError> {
    let dates = parse_chart_dates(&row.event_time)?;
    let anomalies = select_anomalies(&row.telemetry_series, &dates, &row.true_anomalies);
    let series = TelemetrySeries {
        dates,
        values: row.telemetry_series.clone(),
    };
    Ok((series, anomalies))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_is_day_zero() {
        let t = parse_event_time("1970-01-01T00:00:00.0000000Z").unwrap();
        assert_eq!(chart_date(t), 0.0);
    }

    #[test]
    fn noon_is_half_a_day() {
        let t = parse_event_time("1970-01-02T12:00:00.0000000Z").unwrap();
        assert!((chart_date(t) - 1.5).abs() < 1e-12);
    }

    #[test]
    fn fractional_seconds_are_kept() {
        let t = parse_event_time("2021-06-01T12:00:00.2500000Z").unwrap();
        assert_eq!(t.and_utc().timestamp_subsec_micros(), 250_000);
    }

    #[test]
    fn short_fraction_is_right_padded() {
        let t = parse_event_time("2021-06-01T12:00:00.0250Z").unwrap();
        assert_eq!(t.and_utc().timestamp_subsec_micros(), 25_000);
    }

    #[test]
    #[should_panic(expected = "values and flags differ in length")]
    #[cfg(debug_assertions)]
    fn select_anomalies_rejects_mismatched_lengths() {
        select_anomalies(&[1.0, 2.0], &[0.0, 1.0], &[1.0]);
    }

    #[test]
    fn chart_date_inverts() {
        let t = parse_event_time("2021-06-01T12:34:56.7890120Z").unwrap();
        assert_eq!(date_from_chart(chart_date(t)), Some(t));
    }

    #[test]
    fn non_finite_chart_date_has_no_datetime() {
        assert_eq!(date_from_chart(f64::NAN), None);
    }
}
