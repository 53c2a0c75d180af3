//! Tavily adapter: web search plus bulk page extraction.
//!
//! Unlike Serper, Tavily expects the API key inside the JSON body, so
//! requests go out without an auth header.
use super::types::{
    TavilyExtractRequest, TavilyExtractResponse, TavilySearchRequest, TavilySearchResponse,
};
use crate::error::ProviderError;
use crate::normalize;
use crate::traits::{ExtractProvider, SearchOptions, SearchProvider};
use crate::types::{ExtractResponse, SearchResponse};
use crate::{http_from_settings, query_snippet, require_api_key};
use async_trait::async_trait;
use seek_config::{ProviderSettings, TAVILY_API_KEY_ENV};
use seek_http::HttpClient;
use std::time::Instant;

pub const TAVILY_API_BASE: &str = "https://api.tavily.com/";
pub const PROVIDER_NAME: &str = "tavily";

const SEARCH_PATH: &str = "search";
const EXTRACT_PATH: &str = "extract";

#[derive(Clone)]
pub struct TavilyClient {
    http: HttpClient,
    api_key: String,
}

impl std::fmt::Debug for TavilyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TavilyClient")
            .field("base", &self.http.base().as_str())
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl TavilyClient {
    /// Build from explicit settings. Fails with
    /// [`ProviderError::MissingCredential`] when no key is configured.
    pub fn new(settings: &ProviderSettings) -> Result<Self, ProviderError> {
        let api_key = require_api_key(settings, TAVILY_API_KEY_ENV)?.to_string();
        let http = http_from_settings(settings, TAVILY_API_BASE)?;
        Ok(Self { http, api_key })
    }

    /// Build with the key read from `TAVILY_API_KEY` and default endpoint.
    pub fn from_env() -> Result<Self, ProviderError> {
        Self::new(&ProviderSettings::from_env(TAVILY_API_KEY_ENV))
    }
}

#[async_trait]
impl SearchProvider for TavilyClient {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn search(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<SearchResponse, ProviderError> {
        let depth = options.depth.unwrap_or_default();
        let snippet = query_snippet(query);
        let started = Instant::now();
        tracing::info!(target: "web.tavily", query = %snippet, %depth, "tavily.search.start");

        let req = TavilySearchRequest {
            query,
            api_key: &self.api_key,
            search_depth: depth,
            include_domains: Vec::new(),
            exclude_domains: Vec::new(),
        };

        let resp: TavilySearchResponse = match self.http.post_json(SEARCH_PATH, &req).await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::warn!(
                    target: "web.tavily",
                    query = %snippet,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    error = %e,
                    "tavily.search.error"
                );
                return Err(e.into());
            }
        };

        let out = normalize::tavily_search(resp);
        tracing::info!(
            target: "web.tavily",
            query = %snippet,
            hit_count = out.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "tavily.search.success"
        );
        Ok(out)
    }
}

#[async_trait]
impl ExtractProvider for TavilyClient {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn extract(&self, urls: &[String]) -> Result<ExtractResponse, ProviderError> {
        let started = Instant::now();
        tracing::info!(target: "web.tavily", url_count = urls.len(), "tavily.extract.start");

        let req = TavilyExtractRequest {
            urls,
            api_key: &self.api_key,
        };

        let resp: TavilyExtractResponse = match self.http.post_json(EXTRACT_PATH, &req).await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::warn!(
                    target: "web.tavily",
                    url_count = urls.len(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    error = %e,
                    "tavily.extract.error"
                );
                return Err(e.into());
            }
        };

        let out = normalize::tavily_extract(resp);
        if !out.failed_results.is_empty() {
            tracing::warn!(
                target: "web.tavily",
                failed = ?out.failed_results.iter().map(|f| f.url.as_str()).collect::<Vec<_>>(),
                "tavily.extract.partial_failure"
            );
        }
        tracing::info!(
            target: "web.tavily",
            extracted = out.results.len(),
            failed = out.failed_results.len(),
            upstream_secs = out.response_time,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "tavily.extract.success"
        );
        Ok(out)
    }
}
