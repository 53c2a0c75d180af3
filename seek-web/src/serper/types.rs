use serde::{Deserialize, Serialize};

/// Body for `POST /search`. The query is the only field we send.
#[derive(Debug, Clone, Serialize)]
pub struct SerperSearchRequest<'a> {
    #[serde(rename = "q")]
    pub query: &'a str,
}

/// Subset of the Serper search response we consume. Other sections such as
/// `knowledgeGraph` or `peopleAlsoAsk`, and per-entry `title`/`position`, are
/// ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SerperSearchResponse {
    #[serde(default)]
    pub organic: Option<Vec<OrganicResult>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrganicResult {
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub snippet: Option<String>,
}
