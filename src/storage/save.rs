//! Writing a chart tree to disk

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::domain::BundleNode;
use crate::error::{Result, fs as fs_error};

/// Write `node` into `<output>/<chart name>/` and return that directory
///
/// Dependencies are written as directories under `charts/`.
pub fn save_chart(node: &BundleNode, output: &Path) -> Result<PathBuf> {
    let dir = safe_join(output, &node.name)?;
    write_node(node, &dir)?;
    Ok(dir)
}

fn write_node(node: &BundleNode, dir: &Path) -> Result<()> {
    let chart_yaml = node
        .metadata
        .to_yaml()
        .map_err(|e| fs_error::write_failed(dir.join("Chart.yaml").display().to_string(), e.to_string()))?;
    write_file(&dir.join("Chart.yaml"), chart_yaml.as_bytes())?;

    for file in &node.files {
        write_file(&safe_join(dir, &file.path)?, &file.data)?;
    }

    let charts_dir = dir.join("charts");
    for child in &node.children {
        write_node(child, &safe_join(&charts_dir, &child.name)?)?;
    }

    tracing::debug!("Wrote chart {} to {}", node.name, dir.display());
    Ok(())
}

fn write_file(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| fs_error::write_failed(parent.display().to_string(), e.to_string()))?;
    }
    fs::write(path, data).map_err(|e| fs_error::write_failed(path.display().to_string(), e.to_string()))
}

/// Join a chart-relative path, refusing anything that escapes `base`
fn safe_join(base: &Path, relative: &str) -> Result<PathBuf> {
    let candidate = Path::new(relative);
    let is_safe = !relative.is_empty()
        && candidate
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));

    if is_safe {
        Ok(base.join(candidate))
    } else {
        Err(fs_error::unsafe_path(relative))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ChartMetadata;
    use crate::error::SplitError;
    use crate::storage::load_chart;
    use crate::test_fixtures::{create_temp_dir, sample_tree};

    #[test]
    fn test_save_layout() {
        let temp = create_temp_dir();
        let tree = sample_tree();

        let dir = save_chart(&tree, temp.path()).unwrap();
        assert_eq!(dir, temp.path().join("root"));
        assert!(dir.join("Chart.yaml").is_file());
        assert!(dir.join("crds/widget.yaml").is_file());
        assert!(dir.join("charts/first/Chart.yaml").is_file());
        assert!(dir.join("charts/first/charts/nested/Chart.yaml").is_file());

        let meta = ChartMetadata::from_yaml(&std::fs::read_to_string(dir.join("Chart.yaml")).unwrap())
            .unwrap();
        assert_eq!(meta.name, "root");
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let temp = create_temp_dir();
        let tree = sample_tree();
        let dir = save_chart(&tree, temp.path()).unwrap();

        let loaded = load_chart(&dir).unwrap();
        assert_eq!(loaded.node_count(), tree.node_count());
        assert_eq!(loaded.file_count(), tree.file_count());
        assert_eq!(
            loaded.find_file("crds/widget.yaml"),
            tree.find_file("crds/widget.yaml")
        );
    }

    #[test]
    fn test_unsafe_paths_are_rejected() {
        let temp = create_temp_dir();
        let node = BundleNode::new("evil").with_file("../escape.txt", "x");
        let err = save_chart(&node, temp.path()).unwrap_err();
        assert!(matches!(err, SplitError::UnsafePath { .. }));
        assert!(!temp.path().join("escape.txt").exists());

        let absolute = BundleNode::new("evil").with_file("/etc/passwd", "x");
        assert!(save_chart(&absolute, temp.path()).is_err());
    }

    #[test]
    fn test_unwritable_output_fails() {
        let temp = create_temp_dir();
        let blocker = temp.path().join("blocker");
        std::fs::write(&blocker, "file, not a directory").unwrap();

        let err = save_chart(&BundleNode::new("x"), &blocker).unwrap_err();
        assert!(matches!(err, SplitError::FileWriteFailed { .. }));
    }
}
