//! Test fixtures and utilities for reducing test setup duplication.
//!
//! Provides CRD documents, a small multi-level chart tree, in-memory chart
//! archives and temp directory helpers.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{crd_yaml, sample_tree};
//!
//! #[test]
//! fn my_test() {
//!     let tree = sample_tree();
//!     let crd = crd_yaml("example.com", "Widget", "v1");
//! }
//! ```

#![allow(clippy::expect_used)]

use std::path::Path;

use flate2::Compression;
use flate2::write::GzEncoder;
use tempfile::TempDir;

use crate::domain::BundleNode;

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Write `content` at `root/relative`, creating parent directories
pub fn write_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::write(&path, content).expect("Failed to write file");
}

/// A CustomResourceDefinition document for `(group, kind)`
///
/// `version` ends up in the served version list, so two documents for the
/// same key can be told apart.
pub fn crd_yaml(group: &str, kind: &str, version: &str) -> String {
    let plural = format!("{}s", kind.to_lowercase());
    format!(
        "apiVersion: apiextensions.k8s.io/v1
kind: CustomResourceDefinition
metadata:
  name: {plural}.{group}
spec:
  group: {group}
  names:
    kind: {kind}
    plural: {plural}
  scope: Namespaced
  versions:
    - name: {version}
      served: true
      storage: true
"
    )
}

/// A three-level tree with duplicate CRDs across dependencies
///
/// ```text
/// root     crds/widget.yaml (Widget), README.md, values.yaml, doc.yaml, templates/_helpers.tpl
/// ├─ first   crds/gadget.yaml (Gadget), crds/widget.yaml (Widget, duplicate), README.md
/// │  └─ nested  crds/sprocket.yaml (Sprocket)
/// └─ second  crds/gadget.yaml (Gadget, duplicate), templates/_helpers.tpl
/// ```
pub fn sample_tree() -> BundleNode {
    let nested = BundleNode::new("nested").with_file(
        "crds/sprocket.yaml",
        crd_yaml("other.io", "Sprocket", "v1"),
    );

    let first = BundleNode::new("first")
        .with_file("README.md", "# First")
        .with_file("crds/gadget.yaml", crd_yaml("example.com", "Gadget", "v1"))
        .with_file("crds/widget.yaml", crd_yaml("example.com", "Widget", "first"))
        .with_child(nested);

    let second = BundleNode::new("second")
        .with_file("crds/gadget.yaml", crd_yaml("example.com", "Gadget", "second"))
        .with_file("templates/_helpers.tpl", "{{/* second */}}");

    BundleNode::new("root")
        .with_file("README.md", "# Root")
        .with_file("crds/widget.yaml", crd_yaml("example.com", "Widget", "v1"))
        .with_file("doc.yaml", "project:\n  name: Root\n")
        .with_file("templates/_helpers.tpl", "{{/* root */}}")
        .with_file("values.yaml", "replicas: 1\n")
        .with_child(first)
        .with_child(second)
}

/// Build a gzip-compressed tar archive from `(path, content)` pairs
pub fn tgz(entries: &[(&str, &str)]) -> Vec<u8> {
    tgz_bytes(
        entries
            .iter()
            .map(|(path, content)| (*path, content.as_bytes().to_vec()))
            .collect(),
    )
}

/// Like [`tgz`] but with binary contents
pub fn tgz_bytes(entries: Vec<(&str, Vec<u8>)>) -> Vec<u8> {
    let mut builder = tar::Builder::new(GzEncoder::new(Vec::new(), Compression::default()));
    for (path, data) in entries {
        let mut header = tar::Header::new_gnu();
        header.set_entry_type(tar::EntryType::Regular);
        header.set_size(data.len() as u64);
        header.set_mode(0o644);
        builder
            .append_data(&mut header, path, data.as_slice())
            .expect("Failed to append archive entry");
    }
    builder
        .into_inner()
        .expect("Failed to finish archive")
        .finish()
        .expect("Failed to finish gzip stream")
}
