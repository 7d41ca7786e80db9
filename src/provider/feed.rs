//! Feed-pull adapter (unauthenticated RSS, no server-side paging).
//!
//! The feed returns a fixed window of entries, so paging is emulated by
//! fetching `offset + page_size` entries and slicing locally. `total` is the
//! number of entries present in the feed.

use crate::core::{PulseClient, PulseError};
use crate::provider::{ProviderPage, RawArticle};

pub(crate) async fn search(
    client: &PulseClient,
    query: &str,
    page_size: u32,
    page: u32,
) -> Result<ProviderPage, PulseError> {
    let mut url = client.base_feed().clone();
    url.query_pairs_mut()
        .append_pair("q", query)
        .append_pair("hl", "en-US")
        .append_pair("gl", "US")
        .append_pair("ceid", "US:en");

    let resp = client.http().get(url).send().await?;
    if !resp.status().is_success() {
        return Err(PulseError::Status {
            status: resp.status().as_u16(),
            url: resp.url().to_string(),
        });
    }

    let bytes = resp.bytes().await?;
    let parsed = feed_rs::parser::parse(&bytes[..])
        .map_err(|e| PulseError::Data(format!("feed parse error: {e}")))?;

    let total = parsed.entries.len() as u64;
    let offset = ((page.max(1) - 1) * page_size) as usize;
    let items = parsed
        .entries
        .into_iter()
        .skip(offset)
        .take(page_size as usize)
        .map(|entry| {
            let title = entry.title.map(|t| t.content).unwrap_or_default();
            let link = entry
                .links
                .first()
                .map(|l| l.href.clone())
                .unwrap_or_default();
            let description = entry
                .summary
                .map(|s| s.content)
                .unwrap_or_else(|| title.clone());
            let pub_date = entry
                .published
                .or(entry.updated)
                .map(|d| d.to_rfc2822())
                .unwrap_or_default();
            RawArticle {
                title,
                original_link: Some(link.clone()),
                link,
                description,
                pub_date,
            }
        })
        .collect();

    Ok(ProviderPage { items, total })
}
