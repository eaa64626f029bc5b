mod builder;
#[cfg(any(test, feature = "test-utils"))]
mod test_utils;

pub use builder::ContextBuilder;
#[cfg(any(test, feature = "test-utils"))]
pub use test_utils::mock_http;

use reqwest::Client as ReqwestClient;
use twilight_cache_inmemory::DefaultInMemoryCache;

use crate::dbs::GuildConfigStore;

#[cfg(not(any(test, feature = "test-utils")))]
pub type HttpClient = twilight_http::Client;
#[cfg(any(test, feature = "test-utils"))]
pub type HttpClient = mock_http::MockClient;

pub struct Context {
    pub http: HttpClient,
    pub cache: DefaultInMemoryCache,
    pub store: GuildConfigStore,
    pub reqwest: ReqwestClient,
    pub settings: Settings,
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub prefixes: Vec<String>,
    pub api_url: String,
}

impl Settings {
    /// Prefix quoted back to users in usage hints.
    pub fn primary_prefix(&self) -> &str {
        self.prefixes
            .first()
            .map(String::as_str)
            .unwrap_or("!")
    }
}
