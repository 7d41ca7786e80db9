use tracing::warn;

use crate::classify::{
    model::{ArticleText, Verdict},
    wire,
};
use crate::core::{Market, PulseClient, PulseError};
use crate::enrich::MAX_COMPANIES;
use crate::sector::model::Article;

const MAX_REASON_CHARS: usize = 100;
const MAX_SUMMARY_CHARS: usize = 200;
const MAX_BRIEFING_CHARS: usize = 120;
const BRIEFING_ARTICLES: usize = 5;

/// Judge per-article sector relevance, extract companies and summarize, in
/// one batched delegate call.
///
/// The returned list always has exactly `items.len()` entries: a short or
/// malformed upstream response is padded with default verdicts, a long one
/// is truncated, and any failure (missing key, transport, non-2xx, bad
/// JSON) collapses to the all-default list. A degraded delegate must never
/// abort the pipeline, only disable filtering and enrichment.
pub async fn classify_batch(
    client: &PulseClient,
    sector_name: &str,
    category_name: &str,
    market: Market,
    items: &[ArticleText],
) -> Vec<Verdict> {
    if items.is_empty() {
        return Vec::new();
    }
    if client.chat_api_key().is_none() {
        return Verdict::default_list(items.len());
    }
    match try_classify(client, sector_name, category_name, market, items).await {
        Ok(verdicts) => verdicts,
        Err(e) => {
            warn!(sector = sector_name, error = %e, "classification degraded to defaults");
            Verdict::default_list(items.len())
        }
    }
}

async fn try_classify(
    client: &PulseClient,
    sector_name: &str,
    category_name: &str,
    market: Market,
    items: &[ArticleText],
) -> Result<Vec<Verdict>, PulseError> {
    let prompt = build_classify_prompt(sector_name, category_name, market, items);
    let content = chat(client, &prompt, true, None).await?;

    let envelope: wire::VerdictEnvelope = serde_json::from_str(&content)?;
    let mut verdicts: Vec<Verdict> = envelope
        .results
        .unwrap_or_default()
        .into_iter()
        .map(normalize)
        .collect();

    // enforce the length invariant regardless of what the model returned
    verdicts.truncate(items.len());
    while verdicts.len() < items.len() {
        verdicts.push(Verdict::default());
    }
    Ok(verdicts)
}

fn normalize(raw: wire::WireVerdict) -> Verdict {
    Verdict {
        is_relevant: raw.is_relevant.unwrap_or(true),
        companies: raw
            .companies
            .unwrap_or_default()
            .into_iter()
            .take(MAX_COMPANIES)
            .collect(),
        reason: truncate_chars(&raw.reason.unwrap_or_default(), MAX_REASON_CHARS),
        summary: truncate_chars(&raw.summary.unwrap_or_default(), MAX_SUMMARY_CHARS),
    }
}

/// One-line "why is this sector in the spotlight" briefing over up to five
/// articles. Best-effort: any failure yields `None` and never blocks the
/// pipeline.
pub async fn sector_briefing(
    client: &PulseClient,
    sector_name: &str,
    category_name: &str,
    market: Market,
    articles: &[Article],
) -> Option<String> {
    if articles.is_empty() || client.chat_api_key().is_none() {
        return None;
    }
    let prompt = build_briefing_prompt(sector_name, category_name, market, articles);
    match chat(client, &prompt, false, Some(120)).await {
        Ok(text) => {
            let text = text.trim();
            if text.is_empty() {
                None
            } else {
                Some(truncate_chars(text, MAX_BRIEFING_CHARS))
            }
        }
        Err(e) => {
            warn!(sector = sector_name, error = %e, "sector briefing skipped");
            None
        }
    }
}

/// Issue one chat-completions call and return the first choice's content.
async fn chat(
    client: &PulseClient,
    prompt: &str,
    json_mode: bool,
    max_tokens: Option<u32>,
) -> Result<String, PulseError> {
    let key = client
        .chat_api_key()
        .ok_or(PulseError::MissingCredentials("classification delegate"))?;

    let system = if json_mode {
        "You are a financial news analyst. Always output valid JSON."
    } else {
        "You are a concise financial news briefer. Output only the requested one-line text."
    };

    let payload = wire::ChatRequest {
        model: client.chat_model(),
        messages: vec![
            wire::ChatMessage {
                role: "system",
                content: system.to_string(),
            },
            wire::ChatMessage {
                role: "user",
                content: prompt.to_string(),
            },
        ],
        response_format: json_mode.then_some(wire::ResponseFormat {
            kind: "json_object",
        }),
        max_tokens,
    };

    let resp = client
        .http()
        .post(client.base_chat().clone())
        .bearer_auth(key)
        .json(&payload)
        .send()
        .await?;

    if !resp.status().is_success() {
        return Err(PulseError::Status {
            status: resp.status().as_u16(),
            url: resp.url().to_string(),
        });
    }

    let parsed: wire::ChatResponse = serde_json::from_str(&resp.text().await?)?;
    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or_else(|| PulseError::Data("chat response had no content".into()))
}

fn build_classify_prompt(
    sector_name: &str,
    category_name: &str,
    market: Market,
    items: &[ArticleText],
) -> String {
    let block: String = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            format!(
                "[{}] {}: {}\n    {}\n",
                i + 1,
                match market {
                    Market::Kr => "제목",
                    Market::Us => "Title",
                },
                item.title,
                truncate_chars(&item.description, 300),
            )
        })
        .collect();

    match market {
        Market::Kr => format!(
            "당신은 금융 뉴스 분류 전문가입니다.\n\
             현재 섹터: \"{sector_name}\" (카테고리: {category_name})\n\n\
             아래 뉴스 기사들을 분석하여 각각:\n\
             1. 기사의 핵심 주제가 \"{sector_name}\" 섹터와 직접 관련되는지 판정 (is_relevant)\n\
             2. 기사에 언급된 실제 상장 기업명 추출 (최대 {MAX_COMPANIES}개, 공식 상장명 또는 널리 알려진 약칭)\n\
             3. 판정 사유 한 줄 (reason)\n\
             4. 핵심 내용을 완결된 1-2문장으로 요약 (summary)\n\n\
             규칙: \"A기업\", \"모 회사\", \"OO증권\" 같은 익명 표현은 절대 포함하지 말 것. \
             실제 기업명을 특정할 수 없으면 빈 배열.\n\n\
             {block}\n\
             반드시 {{\"results\": [{{\"is_relevant\": true, \"companies\": [], \"reason\": \"\", \"summary\": \"\"}}]}} \
             형식의 JSON으로만 응답하고, results 배열 길이는 정확히 {n}개로 하세요.",
            n = items.len(),
        ),
        Market::Us => format!(
            "You are a financial news classification expert.\n\
             Current sector: \"{sector_name}\" (category: {category_name})\n\n\
             For each article below decide:\n\
             1. Is it directly relevant to the \"{sector_name}\" sector? (is_relevant)\n\
             2. Extract real, publicly listed company names (max {MAX_COMPANIES}; never \
             placeholders like \"Company A\" -- use [] when none can be identified)\n\
             3. A one-line classification reason (reason)\n\
             4. A complete 1-2 sentence summary (summary)\n\n\
             {block}\n\
             Respond ONLY as a JSON object {{\"results\": [...]}} whose results array \
             has exactly {n} entries.",
            n = items.len(),
        ),
    }
}

fn build_briefing_prompt(
    sector_name: &str,
    category_name: &str,
    market: Market,
    articles: &[Article],
) -> String {
    let block: String = articles
        .iter()
        .take(BRIEFING_ARTICLES)
        .enumerate()
        .map(|(i, a)| {
            let gist = a.summary.as_deref().unwrap_or(&a.description);
            format!("[{}] {}\n    {}\n", i + 1, a.title, truncate_chars(gist, 150))
        })
        .collect();

    match market {
        Market::Kr => format!(
            "아래는 \"{sector_name}\"({category_name}) 섹터의 최근 뉴스 제목과 요약입니다.\n\
             이 내용만 바탕으로 이 섹터가 지금 왜 주목받는지, 구체적 기업명이나 이슈를 포함해 \
             50~80자 내외의 한 문장으로만 요약하세요.\n\n{block}\n\
             한 줄 브리핑만 출력하고 다른 설명은 하지 마세요."
        ),
        Market::Us => format!(
            "Below are recent headlines and summaries for the \"{sector_name}\" \
             ({category_name}) sector.\n\
             In one sentence (15-25 words, include concrete companies or themes), \
             say why this sector is in the spotlight right now.\n\n{block}\n\
             Output only the one-line briefing."
        ),
    }
}

fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
