//! Upstream wire shapes → common result shapes.
//!
//! One pure function per provider/operation pair. They only rename fields:
//! no dedup, no reordering, no filtering. Absent lists become empty, absent
//! strings become `""`, absent timings become `0.0`.
use crate::serper::types::SerperSearchResponse;
use crate::tavily::types::{TavilyExtractResponse, TavilySearchResponse};
use crate::types::{ExtractResponse, ExtractResult, FailedResult, SearchResponse, SearchResult};

/// `organic[].link` → `url`, `organic[].snippet` → `content`.
pub fn serper_search(resp: SerperSearchResponse) -> SearchResponse {
    let results = resp
        .organic
        .unwrap_or_default()
        .into_iter()
        .map(|hit| SearchResult {
            url: hit.link.unwrap_or_default(),
            content: hit.snippet.unwrap_or_default(),
        })
        .collect();
    SearchResponse { results }
}

/// `results[].url` / `results[].content` pass through unchanged.
pub fn tavily_search(resp: TavilySearchResponse) -> SearchResponse {
    let results = resp
        .results
        .unwrap_or_default()
        .into_iter()
        .map(|hit| SearchResult {
            url: hit.url.unwrap_or_default(),
            content: hit.content.unwrap_or_default(),
        })
        .collect();
    SearchResponse { results }
}

/// Successes and failures are kept in separate lists.
pub fn tavily_extract(resp: TavilyExtractResponse) -> ExtractResponse {
    let results = resp
        .results
        .unwrap_or_default()
        .into_iter()
        .map(|page| ExtractResult {
            url: page.url.unwrap_or_default(),
            raw_content: page.raw_content.unwrap_or_default(),
        })
        .collect();
    let failed_results = resp
        .failed_results
        .unwrap_or_default()
        .into_iter()
        .map(|failed| FailedResult {
            url: failed.url.unwrap_or_default(),
            error: failed.error.unwrap_or_default(),
        })
        .collect();
    ExtractResponse {
        results,
        failed_results,
        response_time: resp.response_time.unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serper_link_and_snippet_become_url_and_content() {
        let wire: SerperSearchResponse = serde_json::from_str(
            r#"{"organic":[{"link":"https://example.com","snippet":"Example content"}]}"#,
        )
        .unwrap();

        let out = serper_search(wire);

        assert_eq!(
            out.results,
            vec![SearchResult {
                url: "https://example.com".into(),
                content: "Example content".into(),
            }]
        );
    }

    #[test]
    fn serper_keeps_order_and_duplicates() {
        let wire: SerperSearchResponse = serde_json::from_str(
            r#"{"organic":[
                {"link":"https://b.example","snippet":"b","position":1},
                {"link":"https://a.example","snippet":"a","position":2},
                {"link":"https://b.example","snippet":"b","position":3}
            ],"relatedSearches":[{"query":"x"}]}"#,
        )
        .unwrap();

        let urls: Vec<_> = serper_search(wire)
            .results
            .into_iter()
            .map(|r| r.url)
            .collect();

        assert_eq!(urls, ["https://b.example", "https://a.example", "https://b.example"]);
    }

    #[test]
    fn serper_missing_organic_is_empty() {
        let wire: SerperSearchResponse = serde_json::from_str(r#"{"searchParameters":{}}"#).unwrap();
        assert!(serper_search(wire).is_empty());
    }

    #[test]
    fn serper_entry_without_snippet_has_empty_content() {
        let wire: SerperSearchResponse =
            serde_json::from_str(r#"{"organic":[{"link":"https://example.com","snippet":null}]}"#)
                .unwrap();
        assert_eq!(serper_search(wire).results[0].content, "");
    }

    #[test]
    fn tavily_search_maps_each_hit() {
        let wire: TavilySearchResponse = serde_json::from_str(
            r#"{"query":"q","results":[
                {"title":"One","url":"https://one.example","content":"first","score":0.9},
                {"title":"Two","url":"https://two.example","content":"second","score":0.4}
            ],"response_time":1.2}"#,
        )
        .unwrap();

        let out = tavily_search(wire);

        assert_eq!(out.len(), 2);
        assert_eq!(out.results[1].url, "https://two.example");
        assert_eq!(out.results[1].content, "second");
    }

    #[test]
    fn tavily_extract_with_empty_failures() {
        let wire: TavilyExtractResponse = serde_json::from_str(
            r#"{"results":[{"url":"https://example.com","raw_content":"Example content"}],"failed_results":[]}"#,
        )
        .unwrap();

        let out = tavily_extract(wire);

        assert_eq!(
            out.results,
            vec![ExtractResult {
                url: "https://example.com".into(),
                raw_content: "Example content".into(),
            }]
        );
        assert!(out.failed_results.is_empty());
        assert_eq!(out.response_time, 0.0);
    }

    #[test]
    fn tavily_extract_keeps_failures_separate() {
        let wire: TavilyExtractResponse = serde_json::from_str(
            r#"{
                "results":[{"url":"https://ok.example","raw_content":"page"}],
                "failed_results":[
                    {"url":"https://blocked.example","error":"403 Forbidden"},
                    {"url":"https://gone.example","error":"timeout"}
                ],
                "response_time":2.5
            }"#,
        )
        .unwrap();

        let out = tavily_extract(wire);

        assert_eq!(out.results.len(), 1);
        assert_eq!(
            out.failed_results,
            vec![
                FailedResult {
                    url: "https://blocked.example".into(),
                    error: "403 Forbidden".into(),
                },
                FailedResult {
                    url: "https://gone.example".into(),
                    error: "timeout".into(),
                },
            ]
        );
        assert_eq!(out.response_time, 2.5);
    }

    #[test]
    fn tavily_extract_tolerates_absent_or_null_lists() {
        let absent: TavilyExtractResponse =
            serde_json::from_str(r#"{"results":[{"url":"u","raw_content":"c"}]}"#).unwrap();
        let null: TavilyExtractResponse =
            serde_json::from_str(r#"{"results":null,"failed_results":null}"#).unwrap();

        assert!(tavily_extract(absent).failed_results.is_empty());
        let out = tavily_extract(null);
        assert!(out.results.is_empty());
        assert!(out.failed_results.is_empty());
    }

    #[test]
    fn unread_fields_do_not_affect_decoding() {
        let search: TavilySearchResponse = serde_json::from_str(
            r#"{"query":"q","answer":null,"results":[
                {"title":7,"url":"https://example.com","content":"c","score":"high"}
            ],"response_time":"1.67"}"#,
        )
        .unwrap();
        assert_eq!(tavily_search(search).len(), 1);

        let serper: SerperSearchResponse = serde_json::from_str(
            r#"{"organic":[{"title":null,"link":"https://example.com","snippet":"s","position":"1"}]}"#,
        )
        .unwrap();
        assert_eq!(serper_search(serper).len(), 1);
    }

    #[test]
    fn tavily_extract_response_time_accepts_strings() {
        let quoted: TavilyExtractResponse =
            serde_json::from_str(r#"{"results":[],"response_time":"1.67"}"#).unwrap();
        let junk: TavilyExtractResponse =
            serde_json::from_str(r#"{"results":[],"response_time":"n/a"}"#).unwrap();
        let null: TavilyExtractResponse =
            serde_json::from_str(r#"{"results":[],"response_time":null}"#).unwrap();

        assert_eq!(tavily_extract(quoted).response_time, 1.67);
        assert_eq!(tavily_extract(junk).response_time, 0.0);
        assert_eq!(tavily_extract(null).response_time, 0.0);
    }
}
