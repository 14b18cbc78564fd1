// One chart request end to end: query -> wide row -> series -> chart -> base64

use crate::anomaly;
use crate::chart;
use crate::credentials::ServicePrincipal;
use crate::error::AppError;
use crate::kusto::QueryClient;
use crate::models::{QueryRequest, WideRow};

pub async fn create_anomaly_chart(
    client: &dyn QueryClient,
    credentials: &ServicePrincipal,
    request: &QueryRequest,
) -> Result<String, AppError> {
    let table = client.execute(request, credentials).await?;
    let row = WideRow::from_table(&table)?;
    let (series, anomalies) = anomaly::build_series(&row)?;
    tracing::info!(
        points = series.len(),
        anomalies = anomalies.len(),
        "series extracted"
    );
    let encoded = chart::render_base64(series, anomalies).await?;
    Ok(encoded)
}
