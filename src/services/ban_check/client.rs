use reqwest::{Client, StatusCode};
use serde_json::Value;

use super::CheckError;

pub(super) fn endpoint(base_url: &str, uid: &str) -> String {
    format!("{}/check_ban/{uid}", base_url.trim_end_matches('/'))
}

pub(super) async fn fetch(client: &Client, url: &str) -> Result<Value, CheckError> {
    let resp = client.get(url).send().await?;

    let status = resp.status();
    if status != StatusCode::OK {
        tracing::warn!(%status, url, "ban check api returned non-200");
        return Err(CheckError::Status(status));
    }

    let body = resp.bytes().await?;
    serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!(error = %e, url, "ban check api returned invalid json");
        CheckError::Decode(e)
    })
}

#[cfg(test)]
#[path = "tests/client.rs"]
mod tests;
