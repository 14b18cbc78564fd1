use serde::{Deserialize, Serialize};

/// Body of a chart request. Fields are optional on purpose: absence is passed through
/// to the query client, which is where it fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub cluster: Option<String>,
    #[serde(default)]
    pub database: Option<String>,
}

impl QueryRequest {
    pub fn new(
        query: impl Into<String>,
        cluster: impl Into<String>,
        database: impl Into<String>,
    ) -> Self {
        Self {
            query: Some(query.into()),
            cluster: Some(cluster.into()),
            database: Some(database.into()),
        }
    }
}
