//! Identity extraction for CustomResourceDefinition documents

use serde::Deserialize;

use crate::config::SplitConfig;
use crate::domain::{FileArtifact, IdentityKey};
use crate::error::{Result, document};

/// The subset of a CRD needed to identify it
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct CrdHeader {
    api_version: String,
    kind: String,
    spec: CrdSpec,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CrdSpec {
    group: String,
    names: CrdNames,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CrdNames {
    kind: String,
}

/// Extract the `(group, kind)` identity of a CRD file
///
/// Only the first YAML document of the file is considered. Parse failures and
/// documents that are not CRDs come back as recoverable errors.
pub fn extract_key(file: &FileArtifact, config: &SplitConfig) -> Result<IdentityKey> {
    let first = serde_yaml::Deserializer::from_slice(&file.data)
        .next()
        .ok_or_else(|| document::parse_failed(&file.path, "empty document"))?;

    let header = Option::<CrdHeader>::deserialize(first)
        .map_err(|e| document::parse_failed(&file.path, e.to_string()))?
        .ok_or_else(|| document::not_a_schema_definition(&file.path))?;

    if header.api_version.is_empty() || header.kind != config.crd_kind {
        return Err(document::not_a_schema_definition(&file.path));
    }

    Ok(IdentityKey::new(header.spec.group, header.spec.names.kind))
}
