use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct SearchEnvelope {
    pub(crate) total: Option<u64>,
    pub(crate) items: Option<Vec<SearchItem>>,
}

#[derive(Deserialize)]
pub(crate) struct SearchItem {
    pub(crate) title: Option<String>,
    pub(crate) link: Option<String>,
    pub(crate) description: Option<String>,
    #[serde(rename = "pubDate")]
    pub(crate) pub_date: Option<String>,
    #[serde(rename = "originallink")]
    pub(crate) original_link: Option<String>,
}
