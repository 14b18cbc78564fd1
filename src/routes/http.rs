// Handlers: version, chart

use axum::{extract::State, response::IntoResponse};
use bytes::Bytes;

use super::AppState;
use crate::error::AppError;
use crate::models::QueryRequest;
use crate::pipeline;
use crate::version::{NAME, VERSION};

/// GET /version: service name and version from Cargo.toml.
pub(super) async fn version_handler() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}

/// POST /api/CreateAnomalyChart: body `{query, cluster, database}`, responds with the
/// chart as base64 JPEG text. Every failure, including an unreadable body, is a 500.
pub(super) async fn create_anomaly_chart_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<String, AppError> {
    tracing::info!("chart request received");
    let request: QueryRequest = serde_json::from_slice(&body)?;
    let credentials = state.credentials.resolve();
    pipeline::create_anomaly_chart(state.query_client.as_ref(), &credentials, &request).await
}
