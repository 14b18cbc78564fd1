// Query client for the analytics service (Kusto REST v1)

mod auth;
mod response;

pub use response::parse_v1_response;

use crate::config::KustoConfig;
use crate::credentials::ServicePrincipal;
use crate::error::QueryError;
use crate::models::{QueryRequest, ResultTable};
use crate::version;
use async_trait::async_trait;
use std::time::Duration;
use tracing::instrument;

/// Runs a query and hands back the primary result table.
#[async_trait]
pub trait QueryClient: Send + Sync {
    async fn execute(
        &self,
        request: &QueryRequest,
        credentials: &ServicePrincipal,
    ) -> Result<ResultTable, QueryError>;
}

pub struct KustoClient {
    http: reqwest::Client,
    authority_host: String,
}

impl KustoClient {
    pub fn new(config: &KustoConfig) -> Result<Self, QueryError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(version::user_agent())
            .build()?;
        Ok(Self {
            http,
            authority_host: config.authority_host.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl QueryClient for KustoClient {
    #[instrument(skip(self, request, credentials), fields(client = "kusto", operation = "execute"))]
    async fn execute(
        &self,
        request: &QueryRequest,
        credentials: &ServicePrincipal,
    ) -> Result<ResultTable, QueryError> {
        let cluster = request
            .cluster
            .as_deref()
            .ok_or(QueryError::MissingParameter("cluster"))?
            .trim_end_matches('/');
        let database = request
            .database
            .as_deref()
            .ok_or(QueryError::MissingParameter("database"))?;
        let query = request
            .query
            .as_deref()
            .ok_or(QueryError::MissingParameter("query"))?;

        let token =
            auth::acquire_token(&self.http, &self.authority_host, cluster, credentials).await?;

        let resp = self
            .http
            .post(format!("{}/v1/rest/query", cluster))
            .bearer_auth(&token)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&serde_json::json!({ "db": database, "csl": query }))
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(QueryError::Service {
                status: status.as_u16(),
                body,
            });
        }

        let table = parse_v1_response(&body)?;
        tracing::info!(
            cluster,
            database,
            table = %table.name,
            rows = table.rows.len(),
            "query returned primary result"
        );
        Ok(table)
    }
}
