//! crd-only command implementation

use console::Style;

use crate::cli::CrdOnlyArgs;
use crate::config::SplitConfig;
use crate::domain::BundleNode;
use crate::error::Result;
use crate::storage::{load_chart, save_chart};
use crate::transform::{assemble_crd_only, collect_crds, select_descriptive_files};

/// The assembled chart plus counts for reporting
#[derive(Debug)]
pub struct CrdOnlyChart {
    pub chart: BundleNode,
    pub crd_count: usize,
    pub extra_count: usize,
}

pub fn run(args: CrdOnlyArgs) -> Result<()> {
    let config = SplitConfig::default();

    let chart = load_chart(&args.input)?;
    tracing::info!(
        "Loaded chart {} ({} charts, {} files)",
        chart.name,
        chart.node_count(),
        chart.file_count()
    );

    let built = build_crd_only(&chart, args.semver, &config);
    let dir = save_chart(&built.chart, &args.output)?;

    println!(
        "Successfully repackaged {} unique CRDs + {} additional files into {}",
        built.crd_count,
        built.extra_count,
        Style::new().cyan().apply_to(dir.display())
    );
    Ok(())
}

/// Collect CRDs from the whole tree and assemble the flat CRD-only chart
///
/// Per-file problems found during collection are logged as warnings.
pub fn build_crd_only(chart: &BundleNode, semver: bool, config: &SplitConfig) -> CrdOnlyChart {
    let new_name = config.crd_only_name(&chart.name);

    let collected = collect_crds(chart, config);
    for diagnostic in &collected.diagnostics {
        tracing::warn!("{}", diagnostic);
    }
    if collected.is_empty() {
        tracing::info!("No CRDs found in {} or its dependencies", chart.name);
    } else {
        tracing::info!(
            "Collected {} CRDs, discarded {} duplicates",
            collected.len(),
            collected.duplicates().count()
        );
    }

    let extra_files = select_descriptive_files(chart, &new_name, config);
    let crd_count = collected.len();
    let extra_count = extra_files.len();

    CrdOnlyChart {
        chart: assemble_crd_only(chart, collected.into_definitions(), extra_files, semver, config),
        crd_count,
        extra_count,
    }
}
