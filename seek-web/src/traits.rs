use crate::error::ProviderError;
use crate::types::{ExtractResponse, SearchResponse};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How hard a provider should search. Only providers with a notion of search
/// breadth look at it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchDepth {
    #[default]
    Basic,
    Advanced,
}

impl SearchDepth {
    pub fn as_str(self) -> &'static str {
        match self {
            SearchDepth::Basic => "basic",
            SearchDepth::Advanced => "advanced",
        }
    }
}

impl fmt::Display for SearchDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchDepth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(SearchDepth::Basic),
            "advanced" => Ok(SearchDepth::Advanced),
            other => Err(format!("unknown search depth {other:?} (expected basic or advanced)")),
        }
    }
}

/// Knobs a caller may pass to [`SearchProvider::search`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    pub depth: Option<SearchDepth>,
}

impl SearchOptions {
    pub fn with_depth(depth: SearchDepth) -> Self {
        Self { depth: Some(depth) }
    }
}

#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Short provider name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Run one query and return hits in upstream order.
    async fn search(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<SearchResponse, ProviderError>;
}

#[async_trait]
pub trait ExtractProvider: Send + Sync {
    fn name(&self) -> &'static str;

    /// Fetch page content for every URL. Per-URL failures are reported in
    /// [`ExtractResponse::failed_results`], not as an `Err`.
    async fn extract(&self, urls: &[String]) -> Result<ExtractResponse, ProviderError>;
}
