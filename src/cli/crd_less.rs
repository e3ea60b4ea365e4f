use clap::Parser;
use std::path::PathBuf;

/// Arguments for the crd-less command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Strip CRDs from a chart directory:\n    crdsplit crd-less --input ./kubedb --output ./out\n\n\
                  Strip CRDs from a packaged chart:\n    crdsplit crd-less --input kubedb-v2024.1.31.tgz --output ./out")]
pub struct CrdLessArgs {
    /// Path to the input chart directory or .tgz file
    #[arg(long)]
    pub input: PathBuf,

    /// Output directory for the chart without CRDs
    #[arg(long)]
    pub output: PathBuf,
}
