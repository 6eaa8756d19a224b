mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{check, convert, preview};

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    init_logging(cli.verbose);
    match &cli.command {
        Commands::Convert(args) => convert::run(&cli, args),
        Commands::Preview(args) => preview::run(&cli, args),
        Commands::Check(args) => check::run(&cli, args),
    }
}

/// Warnings by default, -v for info, -vv for debug; RUST_LOG takes precedence.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> anyhow::Result<()> { run() }
