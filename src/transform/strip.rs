//! Removal of schema-definition files from a chart tree

use crate::config::SplitConfig;
use crate::domain::BundleNode;

/// Return a copy of `node` with every schema file removed at every level
///
/// Names, metadata and children are kept in place; only file lists shrink.
/// Stripping an already stripped tree returns an identical tree.
pub fn strip_crds(node: &BundleNode, config: &SplitConfig) -> BundleNode {
    let files: Vec<_> = node
        .files
        .iter()
        .filter(|f| !config.is_schema_file(&f.path))
        .cloned()
        .collect();

    let removed = node.files.len() - files.len();
    if removed > 0 {
        tracing::debug!("Removed {} CRD file(s) from {}", removed, node.name);
    }

    BundleNode {
        name: node.name.clone(),
        metadata: node.metadata.clone(),
        files,
        children: node
            .children
            .iter()
            .map(|child| strip_crds(child, config))
            .collect(),
    }
}
