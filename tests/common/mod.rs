//! Common test utilities for crdsplit integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use flate2::Compression;
use flate2::write::GzEncoder;
use tempfile::TempDir;

/// A scratch directory holding an input chart and an output directory
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Path of the input chart directory
    #[allow(dead_code)]
    pub fn chart_dir(&self) -> PathBuf {
        self.path.join("chart")
    }

    /// Path of the output directory
    #[allow(dead_code)]
    pub fn output_dir(&self) -> PathBuf {
        self.path.join("out")
    }

    /// Write a file in workspace
    #[allow(dead_code)]
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Lay out the sample chart tree under `chart/`
    ///
    /// `kubedb` declares `provisioner` then `webhook`. The provisioner repeats
    /// the root's Widget and adds Gadget; the webhook repeats Gadget and adds
    /// Sprocket.
    #[allow(dead_code)]
    pub fn create_sample_chart(&self) -> PathBuf {
        self.write_file(
            "chart/Chart.yaml",
            "apiVersion: v2\n\
             name: kubedb\n\
             version: v2024.1.31\n\
             appVersion: v2024.1.31\n\
             description: KubeDB by AppsCode\n\
             type: application\n\
             home: https://kubedb.com\n\
             keywords:\n  - kubedb\n\
             maintainers:\n  - name: appscode\n    email: support@appscode.com\n\
             annotations:\n  charts.openshift.io/name: KubeDB\n\
             dependencies:\n  \
             - name: provisioner\n    version: v0.41.0\n  \
             - name: webhook\n    version: v0.17.0\n",
        );
        self.write_file("chart/README.md", "# KubeDB\n");
        self.write_file("chart/values.yaml", "replicaCount: 1\n");
        self.write_file("chart/doc.yaml", "project:\n  name: KubeDB\n  shortName: kubedb\nchart:\n  name: kubedb\n");
        self.write_file("chart/templates/_helpers.tpl", "{{/* root helpers */}}\n");
        self.write_file("chart/templates/deployment.yaml", "kind: Deployment\n");
        self.write_file("chart/crds/widget.yaml", &crd_yaml("example.com", "Widget", "root"));

        self.write_file("chart/charts/provisioner/Chart.yaml", "apiVersion: v2\nname: provisioner\nversion: v0.41.0\n");
        self.write_file("chart/charts/provisioner/doc.yaml", "project:\n  name: Provisioner\n");
        self.write_file("chart/charts/provisioner/crds/widget.yaml", &crd_yaml("example.com", "Widget", "provisioner"));
        self.write_file("chart/charts/provisioner/crds/gadget.yaml", &crd_yaml("example.com", "Gadget", "provisioner"));
        self.write_file("chart/charts/provisioner/templates/_helpers.tpl", "{{/* provisioner helpers */}}\n");

        self.write_file("chart/charts/webhook/Chart.yaml", "apiVersion: v2\nname: webhook\nversion: v0.17.0\n");
        self.write_file("chart/charts/webhook/crds/gadget.yaml", &crd_yaml("example.com", "Gadget", "webhook"));
        self.write_file("chart/charts/webhook/crds/sprocket.yaml", &crd_yaml("other.io", "Sprocket", "webhook"));
        self.write_file("chart/charts/webhook/templates/service.yaml", "kind: Service\n");

        self.chart_dir()
    }

    /// Pack `chart/` into `<name>.tgz` under the workspace root
    #[allow(dead_code)]
    pub fn pack_chart(&self, name: &str) -> PathBuf {
        let archive = self.path.join(format!("{name}.tgz"));
        let file = std::fs::File::create(&archive).expect("Failed to create archive");
        let mut builder = tar::Builder::new(GzEncoder::new(file, Compression::default()));
        builder
            .append_dir_all(name, self.chart_dir())
            .expect("Failed to append chart to archive");
        builder
            .into_inner()
            .and_then(|gz| gz.finish())
            .expect("Failed to finish archive");
        archive
    }

    /// Relative paths of every file under `dir`, sorted
    #[allow(dead_code)]
    pub fn list_files(&self, dir: &Path) -> Vec<String> {
        let mut files: Vec<String> = walkdir::WalkDir::new(dir)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter_map(|e| {
                e.path()
                    .strip_prefix(dir)
                    .ok()
                    .map(|p| p.to_string_lossy().replace('\\', "/"))
            })
            .collect();
        files.sort();
        files
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// A minimal CRD document; `marker` ends up in a label so copies can be told apart
#[allow(dead_code)]
pub fn crd_yaml(group: &str, kind: &str, marker: &str) -> String {
    format!(
        "apiVersion: apiextensions.k8s.io/v1\n\
         kind: CustomResourceDefinition\n\
         metadata:\n  name: {plural}.{group}\n  labels:\n    origin: {marker}\n\
         spec:\n  group: {group}\n  names:\n    kind: {kind}\n    plural: {plural}\n  scope: Namespaced\n",
        plural = format!("{}s", kind.to_lowercase()),
    )
}

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn crdsplit_cmd() -> Command {
    Command::cargo_bin("crdsplit").expect("Failed to find crdsplit binary")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_file_operations() {
        let workspace = TestWorkspace::new();
        workspace.write_file("test/file.txt", "hello");
        assert!(workspace.file_exists("test/file.txt"));
        assert_eq!(workspace.read_file("test/file.txt"), "hello");
    }

    #[test]
    fn test_sample_chart_layout() {
        let workspace = TestWorkspace::new();
        let chart = workspace.create_sample_chart();
        let files = workspace.list_files(&chart);
        assert!(files.contains(&"Chart.yaml".to_string()));
        assert!(files.contains(&"charts/webhook/crds/sprocket.yaml".to_string()));
    }
}
