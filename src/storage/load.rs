//! Loading a chart tree from a directory or archive

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::domain::{BundleNode, ChartDependency, ChartMetadata, FileArtifact};
use crate::error::{Result, bundle, fs as fs_error};

use super::archive::{is_archive_name, read_archive};

const CHART_FILE: &str = "Chart.yaml";
const CHARTS_DIR: &str = "charts/";

/// Load a chart from a directory or a `.tgz` archive
pub fn load_chart(path: &Path) -> Result<BundleNode> {
    let origin = path.display().to_string();

    if path.is_dir() {
        let files = read_dir_files(path)?;
        build_node(files, &origin)
    } else if path.is_file() {
        let data = fs::read(path).map_err(|e| fs_error::read_failed(&origin, e.to_string()))?;
        build_node(read_archive(&data, &origin)?, &origin)
    } else {
        Err(bundle::load_failed(origin, "no such file or directory"))
    }
}

/// Read every file under `dir`, sorted by name, as chart-relative artifacts
///
/// Symlinks are followed; a link back to an ancestor directory is reported
/// as a circular dependency.
fn read_dir_files(dir: &Path) -> Result<Vec<FileArtifact>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).follow_links(true).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            if let Some(ancestor) = e.loop_ancestor() {
                let at = e.path().map(|p| p.display().to_string()).unwrap_or_default();
                bundle::circular(format!("{} -> {}", at, ancestor.display()))
            } else {
                bundle::load_failed(dir.display().to_string(), e.to_string())
            }
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry.path().strip_prefix(dir).unwrap_or(entry.path());
        let relative = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        let data = fs::read(entry.path())
            .map_err(|e| fs_error::read_failed(entry.path().display().to_string(), e.to_string()))?;
        files.push(FileArtifact::new(relative, data));
    }

    Ok(files)
}

/// Build a node from the flat file list of one chart
///
/// `charts/<dir>/...` and `charts/*.tgz` become children; everything else
/// except `Chart.yaml` stays on the node.
fn build_node(files: Vec<FileArtifact>, origin: &str) -> Result<BundleNode> {
    let mut metadata = None;
    let mut own_files = Vec::new();
    let mut subchart_dirs: Vec<(String, Vec<FileArtifact>)> = Vec::new();
    let mut subchart_archives = Vec::new();

    for file in files {
        if file.path == CHART_FILE {
            metadata = Some(parse_metadata(&file, origin)?);
            continue;
        }

        let Some(rest) = file.path.strip_prefix(CHARTS_DIR) else {
            own_files.push(file);
            continue;
        };

        if let Some((dir, inner)) = rest.split_once('/') {
            let inner = FileArtifact::new(inner, file.data);
            match subchart_dirs.iter_mut().find(|(name, _)| name == dir) {
                Some((_, group)) => group.push(inner),
                None => subchart_dirs.push((dir.to_string(), vec![inner])),
            }
        } else if is_archive_name(rest) {
            subchart_archives.push(file);
        } else {
            tracing::debug!("Ignoring {} in {}", file.path, origin);
        }
    }

    let metadata =
        metadata.ok_or_else(|| bundle::load_failed(origin, "Chart.yaml file is missing"))?;

    let mut children = Vec::new();
    for (dir, group) in subchart_dirs {
        children.push(build_node(group, &format!("{origin}/charts/{dir}"))?);
    }
    for archive in subchart_archives {
        let child_origin = format!("{origin}/{}", archive.path);
        let files = read_archive(&archive.data, &child_origin)?;
        children.push(build_node(files, &child_origin)?);
    }
    let children = order_children(children, &metadata.dependencies);

    tracing::debug!(
        "Loaded chart {} ({} files, {} dependencies)",
        metadata.name,
        own_files.len(),
        children.len()
    );

    Ok(BundleNode {
        name: metadata.name.clone(),
        metadata,
        files: own_files,
        children,
    })
}

fn parse_metadata(file: &FileArtifact, origin: &str) -> Result<ChartMetadata> {
    let text = String::from_utf8_lossy(&file.data);
    let metadata = ChartMetadata::from_yaml(&text)
        .map_err(|e| bundle::metadata_invalid(origin, e.to_string()))?;

    if metadata.name.trim().is_empty() {
        return Err(bundle::metadata_invalid(origin, "chart name is required"));
    }
    Ok(metadata)
}

/// Order children by their position in `Chart.yaml` dependencies
///
/// Each declaration claims the first unclaimed child whose chart name matches
/// and names it after the dependency's alias, so two aliased copies of one
/// chart end up under distinct names. Undeclared children keep their load
/// order after all declared ones.
fn order_children(children: Vec<BundleNode>, declared: &[ChartDependency]) -> Vec<BundleNode> {
    let mut pending: Vec<Option<BundleNode>> = children.into_iter().map(Some).collect();
    let mut ordered = Vec::with_capacity(pending.len());

    for dep in declared {
        let claimed = pending.iter_mut().find(|slot| {
            slot.as_ref().is_some_and(|child| {
                child.metadata.name == dep.name || child.metadata.name == dep.effective_name()
            })
        });
        if let Some(mut child) = claimed.and_then(Option::take) {
            child.name = dep.effective_name().to_string();
            ordered.push(child);
        }
    }

    ordered.extend(pending.into_iter().flatten());
    ordered
}
