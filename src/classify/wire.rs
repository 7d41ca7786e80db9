use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub(crate) struct ChatRequest<'a> {
    pub(crate) model: &'a str,
    pub(crate) messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) response_format: Option<ResponseFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) max_tokens: Option<u32>,
}

#[derive(Serialize)]
pub(crate) struct ChatMessage<'a> {
    pub(crate) role: &'a str,
    pub(crate) content: String,
}

#[derive(Serialize)]
pub(crate) struct ResponseFormat {
    #[serde(rename = "type")]
    pub(crate) kind: &'static str,
}

#[derive(Deserialize)]
pub(crate) struct ChatResponse {
    pub(crate) choices: Vec<Choice>,
}

#[derive(Deserialize)]
pub(crate) struct Choice {
    pub(crate) message: ChoiceMessage,
}

#[derive(Deserialize)]
pub(crate) struct ChoiceMessage {
    pub(crate) content: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct VerdictEnvelope {
    pub(crate) results: Option<Vec<WireVerdict>>,
}

#[derive(Deserialize)]
pub(crate) struct WireVerdict {
    pub(crate) is_relevant: Option<bool>,
    pub(crate) companies: Option<Vec<String>>,
    pub(crate) reason: Option<String>,
    pub(crate) summary: Option<String>,
}
