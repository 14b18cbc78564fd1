// AAD client-credentials token for the cluster resource

use crate::credentials::ServicePrincipal;
use crate::error::QueryError;
use serde::Deserialize;

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

fn token_url(authority_host: &str, tenant_id: &str) -> String {
    format!("{}/{}/oauth2/v2.0/token", authority_host, tenant_id)
}

fn scope_for(cluster: &str) -> String {
    format!("{}/.default", cluster.trim_end_matches('/'))
}

pub(super) async fn acquire_token(
    http: &reqwest::Client,
    authority_host: &str,
    cluster: &str,
    credentials: &ServicePrincipal,
) -> Result<String, QueryError> {
    let scope = scope_for(cluster);
    let form = [
        ("grant_type", "client_credentials"),
        ("client_id", credentials.client_id.as_str()),
        ("client_secret", credentials.client_secret.as_str()),
        ("scope", scope.as_str()),
    ];
    let resp = http
        .post(token_url(authority_host, &credentials.tenant_id))
        .form(&form)
        .send()
        .await?;

    let status = resp.status();
    let body = resp.text().await?;
    if !status.is_success() {
        return Err(QueryError::Token {
            status: status.as_u16(),
            body,
        });
    }
    let token: TokenResponse = serde_json::from_str(&body)
        .map_err(|e| QueryError::Malformed(format!("token response: {}", e)))?;
    Ok(token.access_token)
}
