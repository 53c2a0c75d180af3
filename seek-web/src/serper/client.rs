//! Serper (Google results) snippet-search adapter.
//!
//! The key travels in the `X-API-KEY` header; the body carries only the
//! query. Serper has no notion of search depth, so `SearchOptions::depth` is
//! accepted and ignored.
use super::types::{SerperSearchRequest, SerperSearchResponse};
use crate::error::ProviderError;
use crate::normalize;
use crate::traits::{SearchOptions, SearchProvider};
use crate::types::SearchResponse;
use crate::{http_from_settings, query_snippet, require_api_key};
use async_trait::async_trait;
use seek_config::{ProviderSettings, SERPER_API_KEY_ENV};
use seek_http::{Auth, HttpClient, RequestOpts};
use std::time::Instant;

pub const SERPER_API_BASE: &str = "https://google.serper.dev/";
pub const PROVIDER_NAME: &str = "serper";

const SEARCH_PATH: &str = "search";

#[derive(Clone, Debug)]
pub struct SerperClient {
    http: HttpClient,
    auth: Auth,
}

impl SerperClient {
    /// Build from explicit settings. Fails with
    /// [`ProviderError::MissingCredential`] when no key is configured; no
    /// request is made here.
    pub fn new(settings: &ProviderSettings) -> Result<Self, ProviderError> {
        let api_key = require_api_key(settings, SERPER_API_KEY_ENV)?;
        let auth = Auth::header("x-api-key", api_key)?;
        let http = http_from_settings(settings, SERPER_API_BASE)?;
        Ok(Self { http, auth })
    }

    /// Build with the key read from `SERPER_API_KEY` and default endpoint.
    pub fn from_env() -> Result<Self, ProviderError> {
        Self::new(&ProviderSettings::from_env(SERPER_API_KEY_ENV))
    }
}

#[async_trait]
impl SearchProvider for SerperClient {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn search(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<SearchResponse, ProviderError> {
        if let Some(depth) = options.depth {
            tracing::debug!(target: "web.serper", %depth, "serper.search.depth_ignored");
        }

        let snippet = query_snippet(query);
        let started = Instant::now();
        tracing::info!(target: "web.serper", query = %snippet, "serper.search.start");

        let req = SerperSearchRequest { query };
        let opts = RequestOpts {
            auth: Some(self.auth.clone()),
            ..Default::default()
        };

        let resp: SerperSearchResponse = match self.http.post_json_opts(SEARCH_PATH, &req, opts).await
        {
            Ok(resp) => resp,
            Err(e) => {
                tracing::warn!(
                    target: "web.serper",
                    query = %snippet,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    error = %e,
                    "serper.search.error"
                );
                return Err(e.into());
            }
        };

        let out = normalize::serper_search(resp);
        tracing::info!(
            target: "web.serper",
            query = %snippet,
            hit_count = out.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "serper.search.success"
        );
        Ok(out)
    }
}
