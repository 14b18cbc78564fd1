// HTTP routes

mod http;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::credentials::CredentialSource;
use crate::kusto::QueryClient;

/// Route the Functions host forwards the HTTP trigger to.
pub const CHART_ROUTE: &str = "/api/CreateAnomalyChart";

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) query_client: Arc<dyn QueryClient>,
    pub(crate) credentials: CredentialSource,
}

pub fn app(query_client: Arc<dyn QueryClient>, credentials: CredentialSource) -> Router {
    let state = AppState {
        query_client,
        credentials,
    };
    Router::new()
        .route("/", get(|| async { "anomaly-chart is running" })) // GET /
        .route("/version", get(http::version_handler)) // GET /version
        .route(
            CHART_ROUTE,
            post(http::create_anomaly_chart_handler).get(http::create_anomaly_chart_handler),
        ) // POST|GET /api/CreateAnomalyChart
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
