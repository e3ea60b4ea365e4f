use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Arguments for the crd-only command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Collect CRDs from a chart directory:\n    crdsplit crd-only --input ./kubedb --output ./out\n\n\
                  Keep a leading 'v' in the chart version:\n    crdsplit crd-only --input ./kubedb --output ./out --semver=false")]
pub struct CrdOnlyArgs {
    /// Path to the input chart directory or .tgz file
    #[arg(long)]
    pub input: PathBuf,

    /// Output directory for the repackaged CRD-only chart
    #[arg(long)]
    pub output: PathBuf,

    /// Use a strict semver chart version (no 'v' prefix)
    #[arg(long, default_value_t = true, action = ArgAction::Set, num_args = 0..=1, default_missing_value = "true")]
    pub semver: bool,
}
