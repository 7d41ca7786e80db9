/// Title + description of one article, as handed to the delegate.
#[derive(Debug, Clone)]
pub struct ArticleText {
    pub title: String,
    pub description: String,
}

/// The delegate's judgement for one article.
///
/// The default verdict keeps the article: when the delegate is unavailable
/// the pipeline degrades to "everything is relevant, nothing enriched"
/// rather than dropping news.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// Whether the article belongs to the sector it was fetched for.
    pub is_relevant: bool,
    /// Company names the delegate extracted, at most 5, unfiltered.
    pub companies: Vec<String>,
    /// One-line classification rationale, at most 100 chars.
    pub reason: String,
    /// 1-2 sentence summary, at most 200 chars.
    pub summary: String,
}

impl Default for Verdict {
    fn default() -> Self {
        Self {
            is_relevant: true,
            companies: Vec::new(),
            reason: String::new(),
            summary: String::new(),
        }
    }
}

impl Verdict {
    /// The neutral fallback list: one default verdict per input article.
    #[must_use]
    pub fn default_list(len: usize) -> Vec<Verdict> {
        vec![Verdict::default(); len]
    }
}
