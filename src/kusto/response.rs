// REST v1 response body -> primary ResultTable

use crate::error::QueryError;
use crate::models::ResultTable;
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize)]
struct V1Response {
    #[serde(rename = "Tables")]
    tables: Vec<V1Table>,
}

#[derive(Deserialize)]
struct V1Table {
    #[serde(rename = "TableName", default)]
    table_name: String,
    #[serde(rename = "Columns")]
    columns: Vec<V1Column>,
    #[serde(rename = "Rows")]
    rows: Vec<Vec<Value>>,
}

#[derive(Deserialize)]
struct V1Column {
    #[serde(rename = "ColumnName")]
    column_name: String,
}

/// First table of a v1 response is the primary result; later tables are query metadata.
pub fn parse_v1_response(body: &str) -> Result<ResultTable, QueryError> {
    let resp: V1Response =
        serde_json::from_str(body).map_err(|e| QueryError::Malformed(e.to_string()))?;
    let table = resp.tables.into_iter().next().ok_or(QueryError::NoTables)?;
    Ok(ResultTable {
        name: table.table_name,
        columns: table.columns.into_iter().map(|c| c.column_name).collect(),
        rows: table.rows,
    })
}
