#![allow(dead_code)]

mod cli;
mod application;
mod domain;
mod data;
mod config;
mod infra;

use anyhow::Result;
use cli::Cli;
use clap::Parser;
use tracing_subscriber::filter::{Directive, LevelFilter};

fn main() -> Result<()> {
    let default_directive: Directive = "recnet_config=info"
        .parse()
        .unwrap_or_else(|_| LevelFilter::INFO.into());

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_directive),
        )
        .init();

    let cli = Cli::parse();
    cli.run()
}
