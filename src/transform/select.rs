//! Descriptive files carried from the root chart into the CRD-only chart

use wax::{CandidatePath, Glob, Pattern};

use crate::config::SplitConfig;
use crate::domain::{BundleNode, FileArtifact};

use super::rewrite::rewrite_or_keep;

/// Pick the allow-listed files and shared template helpers of `root`
///
/// Dependencies are never looked at. The documentation descriptor is
/// renamed to `new_name`; every other file is copied verbatim.
pub fn select_descriptive_files(
    root: &BundleNode,
    new_name: &str,
    config: &SplitConfig,
) -> Vec<FileArtifact> {
    let mut selected: Vec<FileArtifact> = config
        .descriptive_files
        .iter()
        .filter_map(|name| root.find_file(name))
        .map(|file| {
            if file.path == config.doc_descriptor {
                rewrite_or_keep(file, new_name)
            } else {
                file.clone()
            }
        })
        .collect();

    let helpers = compile_helper_globs(&config.helper_globs);
    selected.extend(
        root.files
            .iter()
            .filter(|f| {
                let candidate = CandidatePath::from(f.path.as_str());
                helpers.iter().any(|glob| glob.matched(&candidate).is_some())
            })
            .cloned(),
    );

    selected
}

/// Patterns that fail to compile are logged and left out
fn compile_helper_globs(patterns: &[String]) -> Vec<Glob<'_>> {
    patterns
        .iter()
        .filter_map(|pattern| match Glob::new(pattern) {
            Ok(glob) => Some(glob),
            Err(e) => {
                tracing::warn!("Ignoring invalid helper pattern '{}': {}", pattern, e);
                None
            }
        })
        .collect()
}
