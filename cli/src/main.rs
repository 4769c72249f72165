mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{compose, members};
use tracing_subscriber::EnvFilter;

/// Default log filter for a `-v` count; `RUST_LOG` takes precedence.
fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn init_tracing(verbose: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbose).into()))
        .with_writer(std::io::stderr)
        .init();
}

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Members(args) => members::run(&cli, args),
        Commands::Compose(args) => compose::run(&cli, args),
    }
}

fn main() -> anyhow::Result<()> { run() }
