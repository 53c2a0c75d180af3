//! Web search and page extraction through third-party APIs.
//!
//! - Common result shapes (`types`) and the provider traits (`traits`)
//! - Serper snippet-search adapter (`serper`)
//! - Tavily search + extraction adapter (`tavily`)
//! - Pure wire → common mapping (`normalize`)
//!
//! Providers are picked by [`ProviderKind`] and built from explicit
//! [`seek_config::ProviderSettings`]:
//!
//! ```no_run
//! use seek_config::SeekConfigLoader;
//! use seek_web::{ProviderKind, SearchOptions, build_search_provider};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SeekConfigLoader::new().load()?;
//! let provider = build_search_provider(ProviderKind::Serper, &config)?;
//! let hits = provider.search("rust async", &SearchOptions::default()).await?;
//! assert!(hits.len() <= 100);
//! # Ok(())
//! # }
//! ```
pub mod error;
pub mod normalize;
pub mod serper;
pub mod tavily;
pub mod traits;
pub mod types;

pub use error::ProviderError;
pub use serper::SerperClient;
pub use tavily::TavilyClient;
pub use traits::{ExtractProvider, SearchDepth, SearchOptions, SearchProvider};
pub use types::{ExtractResponse, ExtractResult, FailedResult, SearchResponse, SearchResult};

use seek_config::{ProviderSettings, SeekConfig};
use seek_http::HttpClient;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

const QUERY_LOG_CHARS: usize = 160;

/// Which upstream API to talk to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[default]
    Serper,
    Tavily,
}

impl ProviderKind {
    pub fn name(self) -> &'static str {
        match self {
            ProviderKind::Serper => serper::client::PROVIDER_NAME,
            ProviderKind::Tavily => tavily::client::PROVIDER_NAME,
        }
    }

    /// Whether `SearchOptions::depth` changes anything for this provider.
    pub fn supports_depth(self) -> bool {
        matches!(self, ProviderKind::Tavily)
    }

    fn settings(self, config: &SeekConfig) -> &ProviderSettings {
        match self {
            ProviderKind::Serper => &config.serper,
            ProviderKind::Tavily => &config.tavily,
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Build the search adapter for `kind`. Credentials are checked here, so a
/// missing key fails before any network traffic.
pub fn build_search_provider(
    kind: ProviderKind,
    config: &SeekConfig,
) -> Result<Arc<dyn SearchProvider>, ProviderError> {
    let settings = kind.settings(config);
    match kind {
        ProviderKind::Serper => Ok(Arc::new(SerperClient::new(settings)?)),
        ProviderKind::Tavily => Ok(Arc::new(TavilyClient::new(settings)?)),
    }
}

/// Build the extraction adapter for `kind`, or
/// [`ProviderError::Unsupported`] for providers without extraction.
pub fn build_extract_provider(
    kind: ProviderKind,
    config: &SeekConfig,
) -> Result<Arc<dyn ExtractProvider>, ProviderError> {
    match kind {
        ProviderKind::Tavily => Ok(Arc::new(TavilyClient::new(kind.settings(config))?)),
        ProviderKind::Serper => Err(ProviderError::Unsupported {
            provider: kind.name(),
            operation: "extraction",
        }),
    }
}

pub(crate) fn require_api_key<'a>(
    settings: &'a ProviderSettings,
    var: &'static str,
) -> Result<&'a str, ProviderError> {
    settings
        .api_key
        .as_deref()
        .filter(|k| !k.trim().is_empty())
        .ok_or(ProviderError::MissingCredential { var })
}

pub(crate) fn http_from_settings(
    settings: &ProviderSettings,
    default_base: &str,
) -> Result<HttpClient, ProviderError> {
    let base = settings.endpoint.as_deref().unwrap_or(default_base);
    let mut http = HttpClient::new(base)?;
    if let Some(secs) = settings.timeout_secs {
        http = http.with_timeout(Duration::from_secs(secs));
    }
    Ok(http)
}

/// Shorten a query for log lines.
pub(crate) fn query_snippet(query: &str) -> String {
    if query.chars().count() > QUERY_LOG_CHARS {
        let mut s: String = query.chars().take(QUERY_LOG_CHARS).collect();
        s.push('…');
        s
    } else {
        query.to_string()
    }
}
