//! Sector fetch pipeline: cache lookup → provider call → enrichment →
//! classification merge → cache store, for one (sector, page).

pub mod meta;
pub mod model;

pub use model::{Article, NewsSource, SectorResult};

use chrono::Utc;
use tracing::warn;

use crate::cache::session;
use crate::classify::{self, ArticleText};
use crate::core::{Market, PulseClient, PulseError};
use crate::enrich;
use crate::provider::{self, ProviderPage};

pub(crate) fn cache_key(market: Market, sector_id: &str, page: u32) -> String {
    format!("{}sector_{}_{}", market.cache_prefix(), sector_id, page)
}

struct ParsedArticle {
    title: String,
    description: String,
    link: String,
    pub_date: String,
    original_link: Option<String>,
    dict_companies: Vec<String>,
}

/// Fetch one page of one sector's news, cache first.
///
/// A provider failure degrades to an empty page that still flows through
/// the rest of the pipeline: a sector with no news is a legitimate result,
/// not an error.
///
/// # Errors
///
/// Returns [`PulseError::UnknownSector`] if `sector_id` is not in the
/// recognized set; this is checked before any cache or network work.
pub async fn fetch_sector(
    client: &PulseClient,
    sector_id: &str,
    page_size: u32,
    page: u32,
) -> Result<SectorResult, PulseError> {
    let meta = meta::sector_meta(sector_id)
        .ok_or_else(|| PulseError::UnknownSector(sector_id.to_string()))?;
    let market = meta::market_of(sector_id);
    let page = page.max(1);
    let key = cache_key(market, sector_id, page);

    if let Some(cache) = client.cache()
        && let Some(hit) = cache.get::<SectorResult>(&key, market)
    {
        return Ok(hit);
    }

    let keyword = meta.keywords[0];
    let fetched = match provider::search_for(client, market, keyword, page_size, page).await {
        Ok(fetched) => fetched,
        Err(e) => {
            warn!(sector = sector_id, error = %e, "provider failed, continuing with empty page");
            ProviderPage::default()
        }
    };
    let total = fetched.total;

    let parsed: Vec<ParsedArticle> = fetched
        .items
        .into_iter()
        .map(|item| {
            let title = enrich::strip_html(&item.title);
            let description = enrich::strip_html(&item.description);
            let dict_companies =
                enrich::match_companies(&format!("{title} {description}"), sector_id);
            ParsedArticle {
                title,
                description,
                link: item.link,
                pub_date: item.pub_date,
                original_link: item.original_link,
                dict_companies,
            }
        })
        .collect();

    let batch: Vec<ArticleText> = parsed
        .iter()
        .map(|p| ArticleText {
            title: p.title.clone(),
            description: p.description.clone(),
        })
        .collect();
    let verdicts =
        classify::classify_batch(client, meta.name, meta.category_name, market, &batch).await;

    let source = match market {
        Market::Kr => NewsSource::Keyword,
        Market::Us => NewsSource::Feed,
    };
    let articles: Vec<Article> = parsed
        .into_iter()
        .zip(verdicts)
        .filter(|(_, verdict)| verdict.is_relevant)
        .map(|(p, verdict)| {
            // dictionary match wins; delegate output is only trusted after
            // the anonymised-name filter
            let related_companies = if p.dict_companies.is_empty() {
                enrich::filter_fake_companies(&verdict.companies)
            } else {
                p.dict_companies
            };
            Article {
                title: p.title,
                link: p.link,
                description: p.description,
                pub_date: p.pub_date,
                source,
                original_link: p.original_link,
                related_companies,
                classification_reason: (!verdict.reason.is_empty()).then_some(verdict.reason),
                summary: (!verdict.summary.is_empty()).then_some(verdict.summary),
            }
        })
        .collect();

    // upstream total when it reports one, else the kept-article count; one
    // definition for both markets
    let news_volume = if total > 0 {
        total as f64
    } else {
        articles.len() as f64
    };
    let change_rate = enrich::sentiment_score(&articles, market);
    let sector_briefing =
        classify::sector_briefing(client, meta.name, meta.category_name, market, &articles).await;
    let rising_keywords = enrich::rising_keywords(&articles);

    let result = SectorResult {
        sector_id: sector_id.to_string(),
        sector_name: meta.name.to_string(),
        category_id: meta.category_id.to_string(),
        category_name: meta.category_name.to_string(),
        articles,
        news_volume,
        change_rate,
        cached_at: session::local_timestamp(market, Utc::now()),
        sector_briefing,
        rising_keywords,
    };

    if let Some(cache) = client.cache() {
        cache.put(&key, &result);
    }
    Ok(result)
}

/// Legacy unpaged, uncached single-query search: provider call plus markup
/// stripping only, no classification or enrichment.
///
/// # Errors
///
/// Propagates provider transport/auth/parse failures directly.
pub async fn raw_search(
    client: &PulseClient,
    market: Market,
    query: &str,
    count: u32,
) -> Result<Vec<Article>, PulseError> {
    let fetched = provider::search_for(client, market, query, count, 1).await?;
    let source = match market {
        Market::Kr => NewsSource::Keyword,
        Market::Us => NewsSource::Feed,
    };
    Ok(fetched
        .items
        .into_iter()
        .map(|item| Article {
            title: enrich::strip_html(&item.title),
            link: item.link,
            description: enrich::strip_html(&item.description),
            pub_date: item.pub_date,
            source,
            original_link: item.original_link,
            related_companies: Vec::new(),
            classification_reason: None,
            summary: None,
        })
        .collect())
}
