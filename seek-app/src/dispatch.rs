use seek_config::SeekConfig;
use seek_web::{
    ExtractResponse, ProviderError, ProviderKind, SearchOptions, SearchResponse,
    build_extract_provider, build_search_provider,
};

/// One invocation's worth of work.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Search {
        provider: ProviderKind,
        query: String,
        options: SearchOptions,
    },
    /// Extraction is only offered by Tavily.
    Extract { urls: Vec<String> },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Search(SearchResponse),
    Extract(ExtractResponse),
}

/// Build the provider the command needs and issue exactly one request.
/// Provider errors come back untouched.
pub async fn run(command: &Command, config: &SeekConfig) -> Result<Outcome, ProviderError> {
    match command {
        Command::Search {
            provider,
            query,
            options,
        } => {
            let client = build_search_provider(*provider, config)?;
            tracing::debug!(provider = client.name(), ?options, "seek.dispatch.search");
            let resp = client.search(query, options).await?;
            Ok(Outcome::Search(resp))
        }
        Command::Extract { urls } => {
            let client = build_extract_provider(ProviderKind::Tavily, config)?;
            tracing::debug!(provider = client.name(), url_count = urls.len(), "seek.dispatch.extract");
            let resp = client.extract(urls).await?;
            Ok(Outcome::Extract(resp))
        }
    }
}
