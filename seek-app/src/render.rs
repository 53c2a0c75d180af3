//! Console rendering of provider results.
use crate::dispatch::Outcome;
use seek_web::{ExtractResponse, SearchResponse};
use serde::Serialize;
use std::io::{self, Write};

const RULE_WIDTH: usize = 80;
const FAILED_RULE_WIDTH: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn write_outcome<W: Write>(w: &mut W, outcome: &Outcome, format: OutputFormat) -> io::Result<()> {
    match (outcome, format) {
        (Outcome::Search(resp), OutputFormat::Text) => write_search_results(w, resp),
        (Outcome::Extract(resp), OutputFormat::Text) => write_extract_results(w, resp),
        (Outcome::Search(resp), OutputFormat::Json) => write_json(w, resp),
        (Outcome::Extract(resp), OutputFormat::Json) => write_json(w, resp),
    }
}

pub fn write_search_results<W: Write>(w: &mut W, resp: &SearchResponse) -> io::Result<()> {
    for result in &resp.results {
        writeln!(w, "\n🔗 {}", result.url)?;
        writeln!(w, "📝 {}", result.content)?;
        writeln!(w, "{}", "-".repeat(RULE_WIDTH))?;
    }
    Ok(())
}

pub fn write_extract_results<W: Write>(w: &mut W, resp: &ExtractResponse) -> io::Result<()> {
    for result in &resp.results {
        writeln!(w, "\n🔗 {}", result.url)?;
        writeln!(w, "📄 {}", result.raw_content)?;
        writeln!(w, "{}", "-".repeat(RULE_WIDTH))?;
    }

    if !resp.failed_results.is_empty() {
        writeln!(w, "\n❌ Failed URLs:")?;
        for failed in &resp.failed_results {
            writeln!(w, "URL: {}\nError: {}", failed.url, failed.error)?;
            writeln!(w, "{}", "-".repeat(FAILED_RULE_WIDTH))?;
        }
    }
    Ok(())
}

/// Compact JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize>(w: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer(&mut *w, value)?;
    writeln!(w)
}
