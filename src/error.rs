// Error types for each stage of the chart pipeline

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("request is missing `{0}`")]
    MissingParameter(&'static str),
    #[error("http transport: {0}")]
    Http(#[from] reqwest::Error),
    #[error("token endpoint returned {status}: {body}")]
    Token { status: u16, body: String },
    #[error("query service returned {status}: {body}")]
    Service { status: u16, body: String },
    #[error("malformed query response: {0}")]
    Malformed(String),
    #[error("query returned no result tables")]
    NoTables,
}

#[derive(Debug, thiserror::Error)]
pub enum SeriesError {
    #[error("primary result has no rows")]
    NoRows,
    #[error("column `{0}` not found in primary result")]
    MissingColumn(&'static str),
    #[error("column `{0}` does not hold an array in row 0")]
    NotAnArray(&'static str),
    #[error("`{column}`[{index}] is not numeric")]
    NotNumeric { column: &'static str, index: usize },
    #[error("`{column}`[{index}] is not a string")]
    NotAString { column: &'static str, index: usize },
    #[error(
        "series lengths differ: telemetry_series={telemetry}, event_time={event_time}, true_anomalies={anomalies}"
    )]
    LengthMismatch {
        telemetry: usize,
        event_time: usize,
        anomalies: usize,
    },
    #[error("event_time[{index}] {value:?} does not match {format}: {source}")]
    Timestamp {
        index: usize,
        value: String,
        format: &'static str,
        #[source]
        source: EventTimeError,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum EventTimeError {
    #[error("missing `.<fraction>0Z` suffix")]
    MissingFraction,
    #[error("fraction must be 1 to 6 digits followed by `0Z`")]
    Fraction,
    #[error(transparent)]
    Layout(#[from] chrono::ParseError),
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("drawing chart: {0}")]
    Draw(String),
    #[error("encoding image: {0}")]
    Encode(#[from] image::ImageError),
    #[error("render task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Anything that can go wrong while serving one chart request. Always surfaces as a 500.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("invalid request body: {0}")]
    Body(#[from] serde_json::Error),
    #[error(transparent)]
    Query(#[from] QueryError),
    #[error(transparent)]
    Series(#[from] SeriesError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "chart request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}
