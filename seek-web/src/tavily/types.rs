use crate::traits::SearchDepth;
use serde::{Deserialize, Deserializer, Serialize};

/// Body for `POST /search`. Tavily takes the key in the body, not a header.
#[derive(Debug, Clone, Serialize)]
pub struct TavilySearchRequest<'a> {
    pub query: &'a str,
    pub api_key: &'a str,
    pub search_depth: SearchDepth,
    pub include_domains: Vec<String>,
    pub exclude_domains: Vec<String>,
}

/// Body for `POST /extract`.
#[derive(Debug, Clone, Serialize)]
pub struct TavilyExtractRequest<'a> {
    pub urls: &'a [String],
    pub api_key: &'a str,
}

/// Only the hit list is decoded; `query`, `answer`, `response_time` and
/// per-hit `title`/`score` are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TavilySearchResponse {
    #[serde(default)]
    pub results: Option<Vec<TavilySearchHit>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TavilySearchHit {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TavilyExtractResponse {
    #[serde(default)]
    pub results: Option<Vec<TavilyExtracted>>,
    #[serde(default)]
    pub failed_results: Option<Vec<TavilyFailed>>,
    #[serde(default, deserialize_with = "de_opt_secs")]
    pub response_time: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TavilyExtracted {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub raw_content: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TavilyFailed {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Tavily reports `response_time` as either `1.67` or `"1.67"`. Anything
/// unparseable is treated as absent.
fn de_opt_secs<'de, D>(d: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Secs {
        Num(f64),
        Str(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Option::<Secs>::deserialize(d)? {
        Some(Secs::Num(n)) => Some(n),
        Some(Secs::Str(s)) => s.trim().parse().ok(),
        Some(Secs::Other(_)) | None => None,
    })
}
