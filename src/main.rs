mod cli;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use diagram_paginator::{PageLayout, Paginator};
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()),
        )
        .with_target(false)
        .init();

    if let Err(e) = run(&cli) {
        error!("Pagination failed: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let layout = PageLayout::new(cli.page_size.into(), cli.orientation(), cli.margin)
        .context("Invalid page layout")?;

    Paginator::new(layout)
        .run(&cli.input, &cli.output)
        .with_context(|| format!("Could not paginate {}", cli.input.display()))?;

    Ok(())
}
