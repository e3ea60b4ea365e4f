//! crd-less command implementation

use console::Style;

use crate::cli::CrdLessArgs;
use crate::config::SplitConfig;
use crate::domain::BundleNode;
use crate::error::Result;
use crate::storage::{load_chart, save_chart};
use crate::transform::{rewrite_or_keep, strip_crds};

pub fn run(args: CrdLessArgs) -> Result<()> {
    let config = SplitConfig::default();

    let chart = load_chart(&args.input)?;
    tracing::info!(
        "Loaded chart {} ({} charts, {} files)",
        chart.name,
        chart.node_count(),
        chart.file_count()
    );

    let crd_less = build_crd_less(&chart, &config);
    let dir = save_chart(&crd_less, &args.output)?;

    println!(
        "Repackaged chart without CRDs to {}",
        Style::new().cyan().apply_to(dir.display())
    );
    Ok(())
}

/// Strip CRDs from the whole tree and rename the root chart
///
/// The root's documentation descriptor is rewritten with the new name. All
/// other root metadata, annotations included, is kept as loaded.
pub fn build_crd_less(chart: &BundleNode, config: &SplitConfig) -> BundleNode {
    let new_name = config.crd_less_name(&chart.name);

    let mut stripped = strip_crds(chart, config);
    stripped.rename(&new_name);

    if let Some(doc) = stripped.find_file_mut(&config.doc_descriptor) {
        *doc = rewrite_or_keep(doc, &new_name);
    }

    stripped
}
