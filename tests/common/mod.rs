// Shared test helpers
#![allow(dead_code)]

use anomaly_chart::credentials::ServicePrincipal;
use anomaly_chart::error::QueryError;
use anomaly_chart::kusto::QueryClient;
use anomaly_chart::models::{QueryRequest, ResultTable};
use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::Mutex;

/// Event time `minute` minutes after 2021-06-01T12:00, in the service's tick format.
pub fn event_time(minute: u32) -> String {
    format!("2021-06-01T12:{:02}:00.0000000Z", minute)
}

/// Single wide row with the three series columns (plus an unrelated leading column).
pub fn wide_table(values: Value, times: Value, flags: Value) -> ResultTable {
    ResultTable {
        name: "PrimaryResult".into(),
        columns: vec![
            "device_id".into(),
            "telemetry_series".into(),
            "event_time".into(),
            "true_anomalies".into(),
        ],
        rows: vec![vec![json!("sensor-1"), values, times, flags]],
    }
}

/// N = 5 samples, index 3 anomalous.
pub fn five_point_table() -> ResultTable {
    let times: Vec<String> = (0..5).map(event_time).collect();
    wide_table(
        json!([10.0, 11.5, 9.8, 42.0, 10.2]),
        json!(times),
        json!([0, 0, 0, 1, 0]),
    )
}

pub fn test_principal() -> ServicePrincipal {
    ServicePrincipal {
        client_id: "client".into(),
        tenant_id: "tenant".into(),
        client_secret: "secret".into(),
    }
}

pub fn test_request() -> QueryRequest {
    QueryRequest::new(
        "Telemetry | make-series ...",
        "https://example.kusto.windows.net",
        "Metrics",
    )
}

/// Returns a fixed table and records what it was asked for.
pub struct MockQueryClient {
    table: ResultTable,
    pub calls: Mutex<Vec<(QueryRequest, ServicePrincipal)>>,
}

impl MockQueryClient {
    pub fn new(table: ResultTable) -> Self {
        Self {
            table,
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl QueryClient for MockQueryClient {
    async fn execute(
        &self,
        request: &QueryRequest,
        credentials: &ServicePrincipal,
    ) -> Result<ResultTable, QueryError> {
        self.calls
            .lock()
            .unwrap()
            .push((request.clone(), credentials.clone()));
        Ok(self.table.clone())
    }
}

/// Always fails the way the service does when it rejects a query.
pub struct FailingQueryClient;

#[async_trait]
impl QueryClient for FailingQueryClient {
    async fn execute(
        &self,
        _request: &QueryRequest,
        _credentials: &ServicePrincipal,
    ) -> Result<ResultTable, QueryError> {
        Err(QueryError::Service {
            status: 400,
            body: "Syntax error: query could not be parsed".into(),
        })
    }
}
