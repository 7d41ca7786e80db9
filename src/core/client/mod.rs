//! Public client surface + builder.

mod constants;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::cache::{CacheStats, FileCache};
use crate::core::{Market, PulseError};
use constants::{
    DEFAULT_BASE_CHAT, DEFAULT_BASE_FEED, DEFAULT_BASE_SEARCH, DEFAULT_CHAT_MODEL,
    DEFAULT_FANOUT_LIMIT, DEFAULT_PAGE_SIZE, ENV_CHAT_API_KEY, ENV_SEARCH_CLIENT_ID,
    ENV_SEARCH_CLIENT_SECRET, USER_AGENT,
};

/// Credentials for the authenticated keyword-search provider.
#[derive(Debug, Clone)]
pub struct SearchCredentials {
    pub(crate) client_id: String,
    pub(crate) client_secret: String,
}

/// Client handle shared by all pipeline operations.
///
/// Cheap to clone; the HTTP connection pool and the cache store are shared
/// across clones.
#[derive(Debug, Clone)]
pub struct PulseClient {
    http: Client,
    base_search: Url,
    base_feed: Url,
    base_chat: Url,
    search_credentials: Option<SearchCredentials>,
    chat_api_key: Option<String>,
    chat_model: String,
    page_size: u32,
    fanout_limit: usize,
    cache: Option<Arc<FileCache>>,
}

impl PulseClient {
    /// Create a new builder.
    #[must_use]
    pub fn builder() -> PulseClientBuilder {
        PulseClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_search(&self) -> &Url {
        &self.base_search
    }
    pub(crate) fn base_feed(&self) -> &Url {
        &self.base_feed
    }
    pub(crate) fn base_chat(&self) -> &Url {
        &self.base_chat
    }
    pub(crate) fn search_credentials(&self) -> Option<&SearchCredentials> {
        self.search_credentials.as_ref()
    }
    pub(crate) fn chat_api_key(&self) -> Option<&str> {
        self.chat_api_key.as_deref()
    }
    pub(crate) fn chat_model(&self) -> &str {
        &self.chat_model
    }
    pub(crate) fn page_size(&self) -> u32 {
        self.page_size
    }
    pub(crate) fn fanout_limit(&self) -> usize {
        self.fanout_limit
    }
    pub(crate) fn cache(&self) -> Option<&FileCache> {
        self.cache.as_deref()
    }

    /* -------- pipeline operations -------- */

    /// Fetch one sector's news (cache first). See [`crate::sector::fetch_sector`].
    ///
    /// # Errors
    ///
    /// Returns [`PulseError::UnknownSector`] if `sector_id` is not in the
    /// recognized set.
    pub async fn fetch_sector(
        &self,
        sector_id: &str,
        page: u32,
    ) -> Result<crate::sector::SectorResult, PulseError> {
        crate::sector::fetch_sector(self, sector_id, self.page_size, page).await
    }

    /// Fetch every sector of a market concurrently, dropping failures.
    pub async fn fetch_all_sectors(&self, market: Market) -> Vec<crate::sector::SectorResult> {
        crate::heatmap::fetch_all_sectors(self, market, self.page_size).await
    }

    /// Build a full heatmap snapshot for a market.
    ///
    /// # Errors
    ///
    /// Returns [`PulseError::NoData`] if every sector fetch failed.
    pub async fn build_heatmap(
        &self,
        market: Market,
    ) -> Result<crate::heatmap::HeatmapSnapshot, PulseError> {
        crate::heatmap::build_snapshot(self, market).await
    }

    /* -------- cache maintenance -------- */

    /// Drop the cached result for one (sector, page), if present.
    pub fn invalidate_sector(&self, sector_id: &str, page: u32) {
        if let Some(cache) = self.cache() {
            let market = crate::sector::meta::market_of(sector_id);
            cache.invalidate(Some(&crate::sector::cache_key(market, sector_id, page)));
        }
    }

    /// Drop every cached entry.
    pub fn invalidate_all(&self) {
        if let Some(cache) = self.cache() {
            cache.invalidate(None);
        }
    }

    /// Current cache statistics, classified by the given market's TTL.
    /// `None` when caching is disabled.
    #[must_use]
    pub fn cache_stats(&self, market: Market) -> Option<CacheStats> {
        self.cache().map(|c| c.stats(market))
    }
}

/* ----------------------- Builder ----------------------- */

/// Builder for [`PulseClient`].
#[derive(Default)]
pub struct PulseClientBuilder {
    user_agent: Option<String>,
    base_search: Option<Url>,
    base_feed: Option<Url>,
    base_chat: Option<Url>,
    search_credentials: Option<SearchCredentials>,
    chat_api_key: Option<String>,
    chat_model: Option<String>,
    page_size: Option<u32>,
    fanout_limit: Option<usize>,
    cache_dir: Option<PathBuf>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl PulseClientBuilder {
    /// Pick up credentials from the environment where present
    /// (`NAVER_CLIENT_ID`, `NAVER_CLIENT_SECRET`, `OPENAI_API_KEY`).
    /// Missing variables leave the corresponding call degraded, not failing.
    #[must_use]
    pub fn from_env(mut self) -> Self {
        if let (Ok(id), Ok(secret)) = (
            std::env::var(ENV_SEARCH_CLIENT_ID),
            std::env::var(ENV_SEARCH_CLIENT_SECRET),
        ) {
            self.search_credentials = Some(SearchCredentials {
                client_id: id,
                client_secret: secret,
            });
        }
        if let Ok(key) = std::env::var(ENV_CHAT_API_KEY) {
            self.chat_api_key = Some(key);
        }
        self
    }

    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the keyword-search API base URL.
    #[must_use]
    pub fn base_search(mut self, url: Url) -> Self {
        self.base_search = Some(url);
        self
    }

    /// Override the RSS feed base URL.
    #[must_use]
    pub fn base_feed(mut self, url: Url) -> Self {
        self.base_feed = Some(url);
        self
    }

    /// Override the chat-completions endpoint of the classification delegate.
    #[must_use]
    pub fn base_chat(mut self, url: Url) -> Self {
        self.base_chat = Some(url);
        self
    }

    /// Set credentials for the keyword-search provider.
    #[must_use]
    pub fn search_credentials(
        mut self,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        self.search_credentials = Some(SearchCredentials {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        });
        self
    }

    /// Set the API key for the classification delegate.
    #[must_use]
    pub fn chat_api_key(mut self, key: impl Into<String>) -> Self {
        self.chat_api_key = Some(key.into());
        self
    }

    /// Override the delegate model name.
    #[must_use]
    pub fn chat_model(mut self, model: impl Into<String>) -> Self {
        self.chat_model = Some(model.into());
        self
    }

    /// Articles per page for sector fetches. Default: 10.
    #[must_use]
    pub const fn page_size(mut self, n: u32) -> Self {
        self.page_size = Some(n);
        self
    }

    /// Bound on concurrent sector fetches during fan-out. Default: 8.
    #[must_use]
    pub const fn fanout_limit(mut self, n: usize) -> Self {
        self.fanout_limit = Some(n);
        self
    }

    /// Enable the file-backed TTL cache rooted at `dir`.
    /// If not set, every lookup is a miss.
    #[must_use]
    pub fn cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = Some(dir.into());
        self
    }

    /// Set a global request timeout (overall). Default: 15s.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if a default base URL fails to parse or the HTTP
    /// client cannot be constructed.
    pub fn build(self) -> Result<PulseClient, PulseError> {
        let base_search = match self.base_search {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_SEARCH)?,
        };
        let base_feed = match self.base_feed {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_FEED)?,
        };
        let base_chat = match self.base_chat {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_CHAT)?,
        };

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .timeout(self.timeout.unwrap_or(Duration::from_secs(15)));

        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(PulseClient {
            http,
            base_search,
            base_feed,
            base_chat,
            search_credentials: self.search_credentials,
            chat_api_key: self.chat_api_key,
            chat_model: self.chat_model.unwrap_or_else(|| DEFAULT_CHAT_MODEL.into()),
            page_size: self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
            fanout_limit: self.fanout_limit.unwrap_or(DEFAULT_FANOUT_LIMIT),
            cache: self.cache_dir.map(|dir| Arc::new(FileCache::new(dir))),
        })
    }
}
