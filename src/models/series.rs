use serde_json::Value;

use super::ResultTable;
use crate::error::SeriesError;

pub const TELEMETRY_COLUMN: &str = "telemetry_series";
pub const EVENT_TIME_COLUMN: &str = "event_time";
pub const ANOMALY_COLUMN: &str = "true_anomalies";

/// Row 0 of the primary result, where each column carries a whole series as an array.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WideRow {
    pub telemetry_series: Vec<f64>,
    pub event_time: Vec<String>,
    pub true_anomalies: Vec<f64>,
}

impl WideRow {
    /// Reads the three series columns from row 0. All three must hold arrays of equal length.
    pub fn from_table(table: &ResultTable) -> Result<Self, SeriesError> {
        if table.rows.is_empty() {
            return Err(SeriesError::NoRows);
        }

        let telemetry_series = array_cell(table, TELEMETRY_COLUMN)?
            .iter()
            .enumerate()
            .map(|(i, v)| match v {
                Value::Null => Ok(f64::NAN),
                other => other.as_f64().ok_or(SeriesError::NotNumeric {
                    column: TELEMETRY_COLUMN,
                    index: i,
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let event_time = array_cell(table, EVENT_TIME_COLUMN)?
            .into_iter()
            .enumerate()
            .map(|(i, v)| match v {
                Value::String(s) => Ok(s),
                _ => Err(SeriesError::NotAString {
                    column: EVENT_TIME_COLUMN,
                    index: i,
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let true_anomalies = array_cell(table, ANOMALY_COLUMN)?
            .iter()
            .enumerate()
            .map(|(i, v)| match v {
                Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
                other => other.as_f64().ok_or(SeriesError::NotNumeric {
                    column: ANOMALY_COLUMN,
                    index: i,
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        if telemetry_series.len() != event_time.len()
            || telemetry_series.len() != true_anomalies.len()
        {
            return Err(SeriesError::LengthMismatch {
                telemetry: telemetry_series.len(),
                event_time: event_time.len(),
                anomalies: true_anomalies.len(),
            });
        }

        Ok(Self {
            telemetry_series,
            event_time,
            true_anomalies,
        })
    }

    pub fn len(&self) -> usize {
        self.telemetry_series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.telemetry_series.is_empty()
    }
}

/// Array held in row 0 of `column`. Dynamic cells may come back as nested JSON or as a
/// JSON document encoded in a string.
fn array_cell(table: &ResultTable, column: &'static str) -> Result<Vec<Value>, SeriesError> {
    let cell = table
        .cell(0, column)
        .ok_or(SeriesError::MissingColumn(column))?;
    match cell {
        Value::Array(items) => Ok(items.clone()),
        Value::String(s) => match serde_json::from_str::<Value>(s) {
            Ok(Value::Array(items)) => Ok(items),
            _ => Err(SeriesError::NotAnArray(column)),
        },
        _ => Err(SeriesError::NotAnArray(column)),
    }
}

/// Full telemetry series on the chart's numeric date axis (days since the Unix epoch).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TelemetrySeries {
    pub dates: Vec<f64>,
    pub values: Vec<f64>,
}

impl TelemetrySeries {
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// A single flagged sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnomalyPoint {
    pub date: f64,
    pub value: f64,
}

/// Flagged samples in original index order, kept as two parallel sequences.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnomalySeries {
    pub plot_dates: Vec<f64>,
    pub plot_anomalies: Vec<f64>,
}

impl AnomalySeries {
    pub fn push(&mut self, point: AnomalyPoint) {
        self.plot_dates.push(point.date);
        self.plot_anomalies.push(point.value);
    }

    pub fn len(&self) -> usize {
        self.plot_dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plot_dates.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = AnomalyPoint> + '_ {
        self.plot_dates
            .iter()
            .zip(&self.plot_anomalies)
            .map(|(&date, &value)| AnomalyPoint { date, value })
    }
}
