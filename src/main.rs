//! crdsplit - Helm chart CRD splitter
//!
//! Derives two charts from one: a copy of the chart tree with every CRD
//! removed, and a flat chart holding each CRD of the whole tree exactly once.

use clap::Parser;

mod cli;
mod commands;
mod config;
mod domain;
mod error;
mod storage;
mod transform;

#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Commands};

/// Initialize tracing based on CLI flags
///
/// Events go to standard output next to the command's own messages.
fn init_tracing(verbose: u8) {
    use std::io::IsTerminal;
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match verbose {
        0 => "crdsplit=warn",
        1 => "crdsplit=info",
        _ => "crdsplit=debug",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stdout)
        .with_ansi(std::io::stdout().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::CrdLess(args) => commands::crd_less::run(args),
        Commands::CrdOnly(args) => commands::crd_only::run(args),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        println!("Error: {}", e);
        std::process::exit(1);
    }
}
