/// Default User-Agent sent with every request.
pub(crate) const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/124.0 Safari/537.36";

/// Keyword-search news API (Korean market).
pub(crate) const DEFAULT_BASE_SEARCH: &str = "https://openapi.naver.com/v1/search/news.json";

/// RSS search feed (US market).
pub(crate) const DEFAULT_BASE_FEED: &str = "https://news.google.com/rss/search";

/// OpenAI-compatible chat-completions endpoint for the classification delegate.
pub(crate) const DEFAULT_BASE_CHAT: &str = "https://api.openai.com/v1/chat/completions";

/// Model used for classification and briefing calls.
pub(crate) const DEFAULT_CHAT_MODEL: &str = "gpt-4o-mini";

/// Default number of articles per page.
pub(crate) const DEFAULT_PAGE_SIZE: u32 = 10;

/// Default bound on concurrent sector fetches during fan-out. Each fetch
/// may hit the rate-limited keyword provider.
pub(crate) const DEFAULT_FANOUT_LIMIT: usize = 8;

/// Environment variable names read by [`PulseClientBuilder::from_env`].
///
/// [`PulseClientBuilder::from_env`]: super::PulseClientBuilder::from_env
pub(crate) const ENV_SEARCH_CLIENT_ID: &str = "NAVER_CLIENT_ID";
pub(crate) const ENV_SEARCH_CLIENT_SECRET: &str = "NAVER_CLIENT_SECRET";
pub(crate) const ENV_CHAT_API_KEY: &str = "OPENAI_API_KEY";
