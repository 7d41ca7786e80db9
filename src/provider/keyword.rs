//! Keyword-search adapter (authenticated, server-side paging).
//!
//! The upstream takes a 1-based `start` offset and reports its own
//! total-match count, which can exceed what one page returns. The daily call
//! quota is tracked upstream; callers bound their own fan-out.

use crate::core::{PulseClient, PulseError};
use crate::provider::{ProviderPage, RawArticle, wire};

pub(crate) async fn search(
    client: &PulseClient,
    query: &str,
    page_size: u32,
    page: u32,
) -> Result<ProviderPage, PulseError> {
    let creds = client
        .search_credentials()
        .ok_or(PulseError::MissingCredentials("keyword-search provider"))?;

    let start = (page.max(1) - 1) * page_size + 1;
    let mut url = client.base_search().clone();
    url.query_pairs_mut()
        .append_pair("query", query)
        .append_pair("display", &page_size.to_string())
        .append_pair("start", &start.to_string())
        .append_pair("sort", "date");

    let resp = client
        .http()
        .get(url)
        .header("X-Naver-Client-Id", &creds.client_id)
        .header("X-Naver-Client-Secret", &creds.client_secret)
        .send()
        .await?;

    if !resp.status().is_success() {
        return Err(PulseError::Status {
            status: resp.status().as_u16(),
            url: resp.url().to_string(),
        });
    }

    let envelope: wire::SearchEnvelope = serde_json::from_str(&resp.text().await?)?;
    let items = envelope
        .items
        .unwrap_or_default()
        .into_iter()
        .map(|item| RawArticle {
            title: item.title.unwrap_or_default(),
            link: item.link.unwrap_or_default(),
            description: item.description.unwrap_or_default(),
            pub_date: item.pub_date.unwrap_or_default(),
            original_link: item.original_link,
        })
        .collect();

    Ok(ProviderPage {
        items,
        total: envelope.total.unwrap_or(0),
    })
}
