//! Upstream news providers.
//!
//! Two adapters share one contract: given a keyword, a page size and a
//! 1-based page number, return a page of raw articles plus the upstream's
//! total-match count. The keyword-search adapter pages server-side; the feed
//! adapter over-fetches and slices locally because RSS has no paging.
//!
//! Adapters return `Result` so a degraded call is an explicit code path in
//! the pipeline, not a silently swallowed exception.

pub(crate) mod feed;
pub(crate) mod keyword;
mod wire;

use crate::core::{Market, PulseClient, PulseError};

/// One article as delivered by an upstream, before enrichment.
/// Title and description may still contain HTML markup.
#[derive(Debug, Clone)]
pub struct RawArticle {
    pub title: String,
    pub link: String,
    pub description: String,
    /// Upstream-formatted publish timestamp; carried opaque, never parsed.
    pub pub_date: String,
    /// Canonical link to the original publisher, when the upstream has one.
    pub original_link: Option<String>,
}

/// One page of provider output.
#[derive(Debug, Clone, Default)]
pub struct ProviderPage {
    pub items: Vec<RawArticle>,
    /// Upstream total-match count. For the feed adapter this is the number
    /// of entries in the feed, not a true corpus total.
    pub total: u64,
}

/// Dispatch to the market-appropriate adapter.
///
/// # Errors
///
/// Propagates the adapter's transport/auth/parse errors; the sector pipeline
/// maps them to an empty page.
pub(crate) async fn search_for(
    client: &PulseClient,
    market: Market,
    query: &str,
    page_size: u32,
    page: u32,
) -> Result<ProviderPage, PulseError> {
    match market {
        Market::Kr => keyword::search(client, query, page_size, page).await,
        Market::Us => feed::search(client, query, page_size, page).await,
    }
}
