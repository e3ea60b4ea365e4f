//! Chart tree types
//!
//! A `BundleNode` owns its files and its dependency charts. Children are held
//! by value, so a loaded tree can never contain a cycle.

use super::ChartMetadata;

/// A single file inside a chart, addressed relative to the chart root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileArtifact {
    /// Forward-slash path relative to the chart root (e.g. `crds/foo.yaml`)
    pub path: String,
    pub data: Vec<u8>,
}

impl FileArtifact {
    pub fn new(path: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            data: data.into(),
        }
    }

    /// Last path segment
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}

/// A loaded chart and its nested dependency charts
#[derive(Debug, Clone, PartialEq)]
pub struct BundleNode {
    pub name: String,
    pub metadata: ChartMetadata,
    /// Every file of the chart except `Chart.yaml` and `charts/`, in load order
    pub files: Vec<FileArtifact>,
    /// Dependency charts in declaration order
    pub children: Vec<BundleNode>,
}

#[cfg(test)]
impl BundleNode {
    /// Create a node whose metadata carries only the given name
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            metadata: ChartMetadata::named(&name),
            name,
            files: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_file(mut self, path: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        self.files.push(FileArtifact::new(path, data));
        self
    }

    pub fn with_child(mut self, child: BundleNode) -> Self {
        self.children.push(child);
        self
    }
}

impl BundleNode {
    /// Set the chart name in both the node and its metadata
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.metadata.name.clone_from(&self.name);
    }

    pub fn find_file(&self, path: &str) -> Option<&FileArtifact> {
        self.files.iter().find(|f| f.path == path)
    }

    pub fn find_file_mut(&mut self, path: &str) -> Option<&mut FileArtifact> {
        self.files.iter_mut().find(|f| f.path == path)
    }

    /// Number of nodes in this tree, including `self`
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(BundleNode::node_count).sum::<usize>()
    }

    /// Number of files in this tree across every node
    pub fn file_count(&self) -> usize {
        self.files.len() + self.children.iter().map(BundleNode::file_count).sum::<usize>()
    }
}
