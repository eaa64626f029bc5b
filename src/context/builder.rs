use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context as _;
use reqwest::Client as ReqwestClient;
use twilight_cache_inmemory::{DefaultInMemoryCache, ResourceType};

use crate::configs::{ban_check::BAN_CHECK_CONFIGS, discord::DISCORD_CONFIGS};
use crate::dbs::GuildConfigStore;

use super::{Context, HttpClient, Settings};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub struct ContextBuilder {
    http: Option<HttpClient>,
    cache: Option<DefaultInMemoryCache>,
    store: Option<GuildConfigStore>,
    store_path: Option<PathBuf>,
    reqwest: Option<ReqwestClient>,
    prefixes: Option<Vec<String>>,
    api_url: Option<String>,
}

impl Default for ContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ContextBuilder {
    pub fn new() -> Self {
        Self {
            http: None,
            cache: None,
            store: None,
            store_path: None,
            reqwest: None,
            prefixes: None,
            api_url: None,
        }
    }

    pub fn http(mut self, http: HttpClient) -> Self {
        self.http = Some(http);
        self
    }

    pub fn cache(mut self, cache: DefaultInMemoryCache) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn store(mut self, store: GuildConfigStore) -> Self {
        self.store = Some(store);
        self
    }

    pub fn store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store_path = Some(path.into());
        self
    }

    pub fn reqwest(mut self, reqwest: ReqwestClient) -> Self {
        self.reqwest = Some(reqwest);
        self
    }

    pub fn prefixes(mut self, prefixes: Vec<String>) -> Self {
        self.prefixes = Some(prefixes);
        self
    }

    pub fn api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    pub fn build(self) -> anyhow::Result<Context> {
        let http = self.http.unwrap_or_else(default_http);

        let cache = self.cache.unwrap_or_else(|| {
            DefaultInMemoryCache::builder()
                .resource_types(
                    ResourceType::GUILD
                        | ResourceType::CHANNEL
                        | ResourceType::ROLE
                        | ResourceType::USER_CURRENT,
                )
                .build()
        });

        let store = match self.store {
            Some(store) => store,
            None => {
                let path = self
                    .store_path
                    .unwrap_or_else(|| PathBuf::from(&BAN_CHECK_CONFIGS.config_file));
                GuildConfigStore::load(path).context("failed to load guild config")?
            }
        };

        let reqwest = match self.reqwest {
            Some(client) => client,
            None => {
                let timeout_secs = match BAN_CHECK_CONFIGS.timeout_secs {
                    0 => DEFAULT_TIMEOUT_SECS,
                    secs => secs,
                };
                ReqwestClient::builder()
                    .pool_max_idle_per_host(10)
                    .connect_timeout(CONNECT_TIMEOUT)
                    .timeout(Duration::from_secs(timeout_secs))
                    .build()
                    .context("failed to build reqwest client")?
            }
        };

        let settings = Settings {
            prefixes: self
                .prefixes
                .unwrap_or_else(|| DISCORD_CONFIGS.command_prefixes.clone()),
            api_url: self
                .api_url
                .unwrap_or_else(|| BAN_CHECK_CONFIGS.api_url.clone()),
        };

        Ok(Context { http, cache, store, reqwest, settings })
    }
}

#[cfg(not(any(test, feature = "test-utils")))]
fn default_http() -> HttpClient {
    HttpClient::new(DISCORD_CONFIGS.discord_token.clone())
}

#[cfg(any(test, feature = "test-utils"))]
fn default_http() -> HttpClient {
    HttpClient::default()
}
