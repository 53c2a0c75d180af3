use anyhow::Result;
use clap::Parser;
use seek_common::observability::{LogConfig, init_logging};
use seek_config::{SeekConfig, SeekConfigLoader, default_config_path};
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

mod cli;
mod dispatch;
mod render;

use cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    // 1) Load config (env wins over file)
    let config = load_config(cli.config.as_deref())?;

    // 2) Logging never blocks the actual request
    let log_config = LogConfig {
        log_dir: config.logging.dir.clone(),
        emit_stderr: cli.verbose,
        format: config.logging.format,
        default_filter: config
            .logging
            .filter
            .clone()
            .unwrap_or_else(|| LogConfig::default().default_filter),
        ..LogConfig::default()
    };
    if let Err(e) = init_logging(log_config) {
        eprintln!("warning: logging disabled: {e:#}");
    }

    let command = cli.command()?;
    tracing::debug!(?command, "seek.command");

    let outcome = dispatch::run(&command, &config).await?;

    let mut out = io::stdout().lock();
    render::write_outcome(&mut out, &outcome, cli.format())?;
    out.flush()?;
    Ok(())
}

fn load_config(explicit: Option<&Path>) -> Result<SeekConfig> {
    let loader = SeekConfigLoader::new();
    let loader = match (explicit, default_config_path()) {
        (Some(path), _) => loader.with_file(path),
        (None, Some(default)) => loader.with_optional_file(default),
        (None, None) => loader,
    };
    let config = loader.load()?;
    Ok(config)
}
