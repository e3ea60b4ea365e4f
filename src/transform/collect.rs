//! Deduplicated collection of CRDs across a chart tree
//!
//! The tree is walked in preorder: a chart before its dependencies, and
//! dependencies in declaration order. The first CRD seen for an identity key
//! wins, which gives the root chart precedence over every dependency and an
//! earlier dependency precedence over a later one.

use std::collections::HashMap;
use std::fmt;

use crate::config::SplitConfig;
use crate::domain::{BundleNode, FileArtifact, IdentityKey};

use super::extract::extract_key;

/// A CRD retained by the collector
#[derive(Debug, Clone, PartialEq)]
pub struct CollectedDefinition {
    pub key: IdentityKey,
    pub file: FileArtifact,
    /// Name of the chart the file came from
    pub source: String,
}

/// A per-file problem found while collecting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionDiagnostic {
    /// The file could not be read as a CRD and was skipped
    Unparseable {
        source: String,
        path: String,
        reason: String,
    },
    /// The key was already collected from `kept_from`; this copy was dropped
    Duplicate {
        key: IdentityKey,
        path: String,
        kept_from: String,
        discarded_from: String,
    },
}

impl fmt::Display for CollectionDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectionDiagnostic::Unparseable {
                source,
                path,
                reason,
            } => write!(f, "Failed to parse CRD {path} from {source}: {reason}"),
            CollectionDiagnostic::Duplicate {
                key,
                kept_from,
                discarded_from,
                ..
            } => write!(
                f,
                "CRD {key} duplicated in {discarded_from}; keeping version from {kept_from}"
            ),
        }
    }
}

/// CRDs keyed by identity, in first-insertion order
#[derive(Debug, Default)]
pub struct CollectionResult {
    definitions: Vec<CollectedDefinition>,
    index: HashMap<IdentityKey, usize>,
    pub diagnostics: Vec<CollectionDiagnostic>,
}

impl CollectionResult {
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn duplicates(&self) -> impl Iterator<Item = &CollectionDiagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d, CollectionDiagnostic::Duplicate { .. }))
    }

    pub fn into_definitions(self) -> Vec<CollectedDefinition> {
        self.definitions
    }

    /// Insert unless the key is taken; first writer wins
    fn offer(&mut self, key: IdentityKey, file: &FileArtifact, source: &str) {
        if let Some(&existing) = self.index.get(&key) {
            self.diagnostics.push(CollectionDiagnostic::Duplicate {
                path: file.path.clone(),
                kept_from: self.definitions[existing].source.clone(),
                discarded_from: source.to_string(),
                key,
            });
            return;
        }

        self.index.insert(key.clone(), self.definitions.len());
        self.definitions.push(CollectedDefinition {
            key,
            file: file.clone(),
            source: source.to_string(),
        });
    }
}

#[cfg(test)]
impl CollectionResult {
    /// Retained definitions in the order they were first seen
    pub fn definitions(&self) -> &[CollectedDefinition] {
        &self.definitions
    }

    pub fn get(&self, key: &IdentityKey) -> Option<&CollectedDefinition> {
        self.index.get(key).map(|&i| &self.definitions[i])
    }
}

/// Collect every CRD in the tree rooted at `root`
pub fn collect_crds(root: &BundleNode, config: &SplitConfig) -> CollectionResult {
    let mut result = CollectionResult::default();
    visit(root, config, &mut result);
    result
}

fn visit(node: &BundleNode, config: &SplitConfig, result: &mut CollectionResult) {
    tracing::debug!("Collecting CRDs from {}", node.name);

    for file in node.files.iter().filter(|f| config.is_schema_file(&f.path)) {
        match extract_key(file, config) {
            Ok(key) => result.offer(key, file, &node.name),
            Err(e) => result.diagnostics.push(CollectionDiagnostic::Unparseable {
                source: node.name.clone(),
                path: file.path.clone(),
                reason: e.to_string(),
            }),
        }
    }

    for child in &node.children {
        visit(child, config, result);
    }
}
