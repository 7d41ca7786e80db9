//! Article enrichment: markup stripping, dictionary company matching,
//! anonymised-name filtering, title sentiment and rising-keyword ranking.
//! Pure functions, no I/O.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::Market;
use crate::sector::meta::company_dict;
use crate::sector::model::Article;

/// At most this many related companies are attached to one article.
pub(crate) const MAX_COMPANIES: usize = 5;

/// At most this many rising keywords are reported per sector.
const MAX_RISING_KEYWORDS: usize = 8;

static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid html-tag pattern"));

/// Anonymised/placeholder company names the classification delegate is
/// prone to inventing ("A기업", "OO사", "Company A", ...).
static FAKE_NAME_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // single character + corporate suffix
        r"^[A-Za-zㄱ-ㅎ가-힣](기업|사|그룹|회사|업체|은행|증권)$",
        // masking tokens: OO, XX, ○○, ●●
        r"^[OoXx○●]{2}.+$",
        // "모 기업", "해당 회사", "특정 업체", "일부 그룹"
        r"^(모|해당|특정|일부)\s?(기업|회사|업체|그룹|증권|은행)$",
        // hanja placeholder
        r"^某.+$",
        // a single character is never a listed-company name
        r"^[A-Za-zㄱ-ㅎ가-힣]$",
        // english placeholders
        r"^(Company|Firm|Corp)\s+[A-Z]$",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid fake-name pattern"))
    .collect()
});

/// Remove HTML tags and unescape the entities the providers emit in titles
/// and descriptions.
#[must_use]
pub fn strip_html(text: &str) -> String {
    let stripped = HTML_TAG.replace_all(text, "");
    stripped
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}

/// Match the sector's company dictionary against `text` (case-sensitive
/// exact substring). Results come back in dictionary order, capped at
/// [`MAX_COMPANIES`].
#[must_use]
pub fn match_companies(text: &str, sector_id: &str) -> Vec<String> {
    company_dict(sector_id)
        .iter()
        .filter(|name| text.contains(*name))
        .take(MAX_COMPANIES)
        .map(ToString::to_string)
        .collect()
}

/// Drop anonymised/placeholder names from a delegate-sourced company list.
/// Idempotent: filtering an already-filtered list removes nothing further.
/// Never applied to dictionary matches.
#[must_use]
pub fn filter_fake_companies(companies: &[String]) -> Vec<String> {
    companies
        .iter()
        .map(|c| c.trim())
        .filter(|name| !name.is_empty())
        .filter(|name| !FAKE_NAME_PATTERNS.iter().any(|p| p.is_match(name)))
        .map(ToString::to_string)
        .collect()
}

const POSITIVE_KR: [&str; 10] = [
    "상승", "급등", "호재", "수주", "성장", "흑자", "신고가", "확대", "개선", "돌파",
];
const NEGATIVE_KR: [&str; 10] = [
    "하락", "급락", "악재", "손실", "적자", "위기", "감소", "부진", "하향", "경고",
];
const POSITIVE_US: [&str; 10] = [
    "surge", "soar", "rally", "gain", "rise", "jump", "boom", "record", "growth", "bullish",
];
const NEGATIVE_US: [&str; 10] = [
    "drop", "fall", "plunge", "crash", "decline", "loss", "bear", "slump", "tumble", "warning",
];

/// Aggregate title sentiment for a sector's articles.
///
/// Counts positive/negative keyword hits across all titles (one hit per
/// keyword per title; US matching is case-insensitive). Zero total hits
/// yields exactly 0.0; otherwise `((pos - neg) / total) * 5.0` rounded to
/// two decimals, which is bounded to [-5.0, 5.0].
#[must_use]
pub fn sentiment_score(articles: &[Article], market: Market) -> f64 {
    let (positive, negative) = match market {
        Market::Kr => (&POSITIVE_KR, &NEGATIVE_KR),
        Market::Us => (&POSITIVE_US, &NEGATIVE_US),
    };

    let hits = |words: &[&str; 10]| -> i64 {
        articles
            .iter()
            .map(|a| match market {
                Market::Kr => words.iter().filter(|w| a.title.contains(*w)).count(),
                Market::Us => {
                    let title = a.title.to_lowercase();
                    words.iter().filter(|w| title.contains(*w)).count()
                }
            })
            .sum::<usize>() as i64
    };

    let pos = hits(positive);
    let neg = hits(negative);
    let total = pos + neg;
    if total == 0 {
        return 0.0;
    }
    round2(((pos - neg) as f64 / total as f64) * 5.0)
}

/// Rank related-company names across a sector's articles by frequency.
///
/// Names shorter than two characters are excluded; ties are broken by
/// first-seen order; at most 8 names are returned.
#[must_use]
pub fn rising_keywords(articles: &[Article]) -> Vec<String> {
    let mut ranked: Vec<(String, usize)> = Vec::new();
    for article in articles {
        for name in &article.related_companies {
            let name = name.trim();
            if name.chars().count() < 2 {
                continue;
            }
            match ranked.iter_mut().find(|(n, _)| n == name) {
                Some((_, count)) => *count += 1,
                None => ranked.push((name.to_string(), 1)),
            }
        }
    }
    // stable sort keeps first-seen order within equal counts
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
        .into_iter()
        .take(MAX_RISING_KEYWORDS)
        .map(|(name, _)| name)
        .collect()
}

// exact ties round to even
pub(crate) fn round2(x: f64) -> f64 {
    (x * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sector::model::NewsSource;

    fn article(title: &str, companies: &[&str]) -> Article {
        Article {
            title: title.to_string(),
            link: String::new(),
            description: String::new(),
            pub_date: String::new(),
            source: NewsSource::Keyword,
            original_link: None,
            related_companies: companies.iter().map(ToString::to_string).collect(),
            classification_reason: None,
            summary: None,
        }
    }

    #[test]
    fn strip_html_removes_tags_and_entities() {
        assert_eq!(
            strip_html("<b>삼성전자</b> 주가 &quot;급등&quot; &amp; 신고가"),
            "삼성전자 주가 \"급등\" & 신고가"
        );
    }

    #[test]
    fn match_companies_is_ordered_and_capped() {
        let text = "이오테크닉스 한미반도체 DB하이텍 인텔 엔비디아 TSMC 마이크론";
        let matched = match_companies(text, "IT_1");
        assert_eq!(matched.len(), MAX_COMPANIES);
        // dictionary order, not text order
        assert_eq!(matched[0], "마이크론");
    }

    #[test]
    fn match_companies_unknown_sector_is_empty() {
        assert!(match_companies("삼성전자", "ZZ_9").is_empty());
    }

    #[test]
    fn fake_names_are_filtered() {
        let names: Vec<String> = ["A기업", "B사", "OO전자", "모 기업", "某公司", "Company A", "삼성전자", "Apple"]
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(filter_fake_companies(&names), vec!["삼성전자", "Apple"]);
    }

    #[test]
    fn fake_name_filtering_is_idempotent() {
        let names: Vec<String> = ["X증권", "카카오", "해당 업체", "NVIDIA"]
            .iter()
            .map(ToString::to_string)
            .collect();
        let once = filter_fake_companies(&names);
        let twice = filter_fake_companies(&once);
        assert_eq!(once, twice);
        assert_eq!(once, vec!["카카오", "NVIDIA"]);
    }

    #[test]
    fn sentiment_zero_hits_is_exactly_zero() {
        let articles = vec![article("평범한 시장 소식", &[])];
        assert_eq!(sentiment_score(&articles, Market::Kr), 0.0);
    }

    #[test]
    fn sentiment_all_positive_saturates() {
        let articles = vec![article("반도체 급등 상승 돌파", &[])];
        assert_eq!(sentiment_score(&articles, Market::Kr), 5.0);
    }

    #[test]
    fn sentiment_mixed_is_bounded_and_rounded() {
        // 2 positive hits, 1 negative hit: (2-1)/3 * 5 = 1.67
        let articles = vec![article("상승 후 급등, 일부는 하락", &[])];
        let score = sentiment_score(&articles, Market::Kr);
        assert_eq!(score, 1.67);
        assert!((-5.0..=5.0).contains(&score));
    }

    #[test]
    fn sentiment_ties_round_half_to_even() {
        // 9 positive vs 7 negative hits: (2/16) * 5 = 0.625, rounds to 0.62
        let mut articles: Vec<Article> = (0..9).map(|_| article("상승", &[])).collect();
        articles.extend((0..7).map(|_| article("하락", &[])));
        assert_eq!(sentiment_score(&articles, Market::Kr), 0.62);
    }

    #[test]
    fn us_sentiment_is_case_insensitive() {
        let articles = vec![article("Chip stocks SURGE to new Record", &[])];
        assert_eq!(sentiment_score(&articles, Market::Us), 5.0);
    }

    #[test]
    fn rising_keywords_rank_by_frequency_then_first_seen() {
        let articles = vec![
            article("", &["카카오", "네이버"]),
            article("", &["네이버", "크래프톤"]),
            article("", &["네이버", "카카오"]),
        ];
        assert_eq!(rising_keywords(&articles), vec!["네이버", "카카오", "크래프톤"]);
    }

    #[test]
    fn rising_keywords_drop_short_names_and_cap_at_eight() {
        let mut articles = vec![article("", &["X"])];
        for i in 0..10 {
            let name = format!("회사{i}");
            articles.push(article("", &[name.as_str()]));
        }
        let keys = rising_keywords(&articles);
        assert_eq!(keys.len(), 8);
        assert!(!keys.iter().any(|k| k == "X"));
    }
}
