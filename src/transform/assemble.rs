//! Assembly of the flat CRD-only chart and chart renaming

use std::collections::HashSet;

use crate::config::SplitConfig;
use crate::domain::{BundleNode, ChartMetadata, FileArtifact};

use super::collect::CollectedDefinition;

/// Rename a chart, following the naming annotation when the chart carries it
pub fn rename_chart(node: &mut BundleNode, new_name: &str, config: &SplitConfig) {
    node.rename(new_name);
    if let Some(value) = node.metadata.annotations.get_mut(&config.name_annotation) {
        *value = new_name.to_string();
    }
}

/// Drop a single leading `v` from a version string
pub fn strict_version(version: &str) -> &str {
    version.strip_prefix('v').unwrap_or(version)
}

/// Build the single-level CRD-only chart
///
/// Files are the collected CRDs in collection order followed by `extra_files`.
/// Metadata is copied field by field from `root`; dependencies are not.
pub fn assemble_crd_only(
    root: &BundleNode,
    definitions: Vec<CollectedDefinition>,
    extra_files: Vec<FileArtifact>,
    semver: bool,
    config: &SplitConfig,
) -> BundleNode {
    let new_name = config.crd_only_name(&root.name);
    let source = &root.metadata;

    let version = if semver {
        strict_version(&source.version).to_string()
    } else {
        source.version.clone()
    };

    let metadata = ChartMetadata {
        api_version: config.chart_api_version.clone(),
        name: new_name.clone(),
        version,
        description: Some(format!("Chart containing only CRDs from {} chart", root.name)),
        home: source.home.clone(),
        sources: source.sources.clone(),
        keywords: source.keywords.clone(),
        maintainers: source.maintainers.clone(),
        icon: source.icon.clone(),
        condition: source.condition.clone(),
        tags: source.tags.clone(),
        app_version: source.app_version.clone(),
        annotations: source.annotations.clone(),
        kube_version: source.kube_version.clone(),
        ..ChartMetadata::default()
    };

    let mut used_paths = HashSet::new();
    let mut files = Vec::with_capacity(definitions.len() + extra_files.len());
    for def in definitions {
        let path = unique_path(&def, &used_paths, config);
        if path != def.file.path {
            tracing::debug!(
                "Renamed {} from {} to {} to avoid a path clash",
                def.file.path,
                def.source,
                path
            );
        }
        used_paths.insert(path.clone());
        files.push(FileArtifact::new(path, def.file.data));
    }
    files.extend(extra_files);

    let mut chart = BundleNode {
        name: new_name.clone(),
        metadata,
        files,
        children: Vec::new(),
    };
    rename_chart(&mut chart, &new_name, config);
    chart
}

/// Keep the original path unless an earlier CRD already claimed it
fn unique_path(def: &CollectedDefinition, used: &HashSet<String>, config: &SplitConfig) -> String {
    if !used.contains(&def.file.path) {
        return def.file.path.clone();
    }

    let base = format!("{}{}-{}", config.crds_prefix, def.source, def.file.file_name());
    let mut candidate = base.clone();
    let mut n = 2;
    while used.contains(&candidate) {
        candidate = format!("{n}-{base}");
        n += 1;
    }
    candidate
}
