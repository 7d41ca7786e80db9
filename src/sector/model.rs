use serde::{Deserialize, Serialize};

/// The upstream an article came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NewsSource {
    /// The authenticated keyword-search provider.
    Keyword,
    /// The public RSS feed provider.
    Feed,
}

impl NewsSource {
    /// Display label shown alongside articles.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            NewsSource::Keyword => "Naver",
            NewsSource::Feed => "Google News",
        }
    }
}

/// One enriched news article. Immutable once constructed; built only by the
/// sector fetch pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Headline, HTML-stripped.
    pub title: String,
    /// Canonical link to the article.
    pub link: String,
    /// Snippet/description, HTML-stripped.
    pub description: String,
    /// Upstream-formatted publish timestamp, carried opaque.
    pub pub_date: String,
    /// Which provider delivered the article.
    pub source: NewsSource,
    /// Link to the original publisher, when the upstream reports one.
    pub original_link: Option<String>,
    /// Related company names in match order, at most 5.
    pub related_companies: Vec<String>,
    /// One-line relevance rationale from the classification delegate.
    pub classification_reason: Option<String>,
    /// Short AI-generated summary.
    pub summary: Option<String>,
}

/// Aggregate news result for one sector, as cached and served.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorResult {
    pub sector_id: String,
    pub sector_name: String,
    pub category_id: String,
    pub category_name: String,
    /// One page of articles, not the full corpus.
    pub articles: Vec<Article>,
    /// Upstream total-match count, or the kept-article count when the
    /// upstream reports zero. Drives heatmap cell size. The upstream total
    /// can be inconsistent with the returned page; that is not enforced.
    pub news_volume: f64,
    /// Aggregate title sentiment in [-5.0, 5.0]. Drives heatmap cell color.
    pub change_rate: f64,
    /// When this result was assembled, market-local time.
    pub cached_at: String,
    /// Best-effort one-line AI briefing for the sector.
    pub sector_briefing: Option<String>,
    /// Up to 8 company names ranked by frequency across the page.
    pub rising_keywords: Vec<String>,
}
