//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - crd_less: CRD-less chart command arguments
//! - crd_only: CRD-only chart command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod completions;
pub mod crd_less;
pub mod crd_only;

pub use completions::CompletionsArgs;
pub use crd_less::CrdLessArgs;
pub use crd_only::CrdOnlyArgs;

/// crdsplit - split a Helm chart into CRD-less and CRD-only charts
#[derive(Parser, Debug)]
#[command(
    name = "crdsplit",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Split a Helm chart into a CRD-less chart and a CRD-only chart",
    long_about = "crdsplit derives two charts from one: a copy of the chart and all of its \
                  dependencies with every CRD removed, and a flat chart holding each CRD of \
                  the whole dependency tree exactly once.",
    after_help = "Examples:\n   \
                  crdsplit crd-less --input ./kubedb --output ./out\n   \
                  crdsplit crd-only --input kubedb-v2024.1.31.tgz --output ./out\n   \
                  crdsplit crd-only --input ./kubedb --output ./out --semver=false\n"
)]
pub struct Cli {
    /// Increase log verbosity (-v for info, -vv for debug)
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a chart with every CRD removed
    #[command(name = "crd-less")]
    CrdLess(CrdLessArgs),

    /// Generate a chart containing only the chart's CRDs
    #[command(name = "crd-only")]
    CrdOnly(CrdOnlyArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
