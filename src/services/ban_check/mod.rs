mod client;
mod embed;
pub mod models;

use reqwest::{Client, StatusCode};

pub use embed::{COLOR_BANNED, COLOR_CLEAN};
pub use models::{BanCheckResult, NO_DATA, safe_value};

#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("ban check api returned {0}")]
    Status(StatusCode),
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("{0}")]
    Decode(#[from] serde_json::Error),
    #[error("ban check api returned an unexpected payload")]
    Malformed,
}

impl CheckError {
    pub fn user_message(&self) -> String {
        match self {
            CheckError::Status(_) => "❌ Failed to fetch data from the API.".to_string(),
            CheckError::Transport(e) => format!("❌ Error: {e}"),
            CheckError::Decode(e) => format!("❌ Error: {e}"),
            CheckError::Malformed => "❌ Invalid response from API.".to_string(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CheckError::Status(_) => "upstream_status",
            CheckError::Transport(_) => "upstream_transport",
            CheckError::Decode(_) => "upstream_decode",
            CheckError::Malformed => "malformed",
        }
    }
}

pub struct BanCheckService;

impl BanCheckService {
    /// One GET against `{base_url}/check_ban/{uid}`; nothing is retried.
    pub async fn check(
        client: &Client,
        base_url: &str,
        uid: &str,
    ) -> Result<BanCheckResult, CheckError> {
        let url = client::endpoint(base_url, uid);
        let body = client::fetch(client, &url).await?;
        BanCheckResult::from_response(&body)
    }
}
