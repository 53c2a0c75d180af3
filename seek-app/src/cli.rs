use crate::dispatch::Command;
use crate::render::OutputFormat;
use clap::Parser;
use seek_web::{ProviderKind, SearchDepth, SearchOptions};
use std::path::PathBuf;

/// Search the web through Serper or Tavily, or extract page content with Tavily.
#[derive(Debug, Parser)]
#[command(name = "seek", version)]
pub struct Cli {
    /// Query words, or URLs when extracting
    #[arg(required = true, value_name = "QUERY|URL")]
    pub args: Vec<String>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Use Tavily as the provider
    #[arg(short = 't', long, conflicts_with = "serper")]
    pub tavily: bool,

    /// Use Serper as the provider (default)
    #[arg(short = 's', long)]
    pub serper: bool,

    /// Extract page content from URLs (Tavily only)
    #[arg(short = 'e', long, conflicts_with = "serper")]
    pub extract: bool,

    /// Search depth, basic or advanced (Tavily only)
    #[arg(long, default_value = "basic", value_name = "DEPTH")]
    pub depth: SearchDepth,

    /// YAML config file (defaults to ~/.config/seek/seek.yaml when present)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Mirror log events to stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl Cli {
    pub fn provider(&self) -> ProviderKind {
        if self.tavily || self.extract {
            ProviderKind::Tavily
        } else {
            ProviderKind::Serper
        }
    }

    pub fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }

    /// Turn parsed flags into the single operation to run.
    pub fn command(&self) -> anyhow::Result<Command> {
        if self.extract {
            let urls: Vec<String> = self
                .args
                .iter()
                .flat_map(|a| a.split_whitespace())
                .map(str::to_string)
                .collect();
            anyhow::ensure!(!urls.is_empty(), "no URLs given to extract");
            return Ok(Command::Extract { urls });
        }

        let provider = self.provider();
        // Depth only means something to providers with a search-breadth knob.
        let options = if provider.supports_depth() {
            SearchOptions::with_depth(self.depth)
        } else {
            SearchOptions::default()
        };
        Ok(Command::Search {
            provider,
            query: self.args.join(" "),
            options,
        })
    }
}
