//! Provider-independent result shapes.
//!
//! These are what the CLI prints and serializes; each adapter converts its
//! upstream wire format into them through [`crate::normalize`].
use serde::{Deserialize, Serialize};

/// One search hit: where it lives and a text snippet describing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub url: String,
    pub content: String,
}

/// Search hits in the order the provider returned them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
}

impl SearchResponse {
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Full page content the provider pulled from `url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractResult {
    pub url: String,
    pub raw_content: String,
}

/// A URL the provider could not extract, with its reported reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedResult {
    pub url: String,
    pub error: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractResponse {
    pub results: Vec<ExtractResult>,
    pub failed_results: Vec<FailedResult>,
    /// Upstream-reported processing time, in seconds.
    pub response_time: f64,
}
