use std::io;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use usf_items::cli::Cli;
use usf_items::config::Config;
use usf_items::data::{ItemRepository, SimulatedRemoteSource, SourceSettings};
use usf_items::headless::{parse_script, run_headless, OutputFormat};
use usf_items::logging::{init_tracing, LogSink};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    cli.apply_overrides(&mut config);
    config.validate()?;

    let sink = LogSink::resolve(&config.logging, cli.headless);
    init_tracing(&config.logging, &sink)?;
    tracing::debug!(?config, "Configuration loaded");

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    let source = SimulatedRemoteSource::new(SourceSettings::from(&config.source));
    let repository = ItemRepository::new(Arc::new(source));

    if cli.headless {
        let steps = parse_script(cli.script.as_deref().unwrap_or_default())?;
        let format = if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };
        let mut stdout = io::stdout().lock();
        runtime.block_on(run_headless(repository, &steps, format, &mut stdout))?;
    } else {
        let _enter = runtime.enter();
        usf_items::ui::runtime::run(&config, repository).context("Terminal UI failed")?;
    }

    Ok(())
}
