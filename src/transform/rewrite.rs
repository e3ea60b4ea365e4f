//! Renaming inside the `doc.yaml` documentation descriptor

use serde_yaml::{Mapping, Value};

use crate::domain::FileArtifact;
use crate::error::{Result, document};

/// Nested fields set to the new chart name
const NAME_FIELDS: &[&[&str]] = &[
    &["project", "name"],
    &["project", "shortName"],
    &["chart", "name"],
    &["release", "name"],
];

/// Set every name field of a descriptor to `new_name`
///
/// Missing intermediate mappings are created and existing values are
/// overwritten. An empty document is treated as an empty mapping.
pub fn rewrite_descriptor(file: &FileArtifact, new_name: &str) -> Result<Vec<u8>> {
    let doc: Value = serde_yaml::from_slice(&file.data)
        .map_err(|e| document::parse_failed(&file.path, e.to_string()))?;

    let mut root = match doc {
        Value::Null => Mapping::new(),
        Value::Mapping(map) => map,
        _ => return Err(document::not_a_mapping(&file.path, "<root>")),
    };

    for fields in NAME_FIELDS {
        set_nested_string(&mut root, fields, new_name)
            .map_err(|field| document::not_a_mapping(&file.path, field))?;
    }

    serde_yaml::to_string(&root)
        .map(String::into_bytes)
        .map_err(|e| document::parse_failed(&file.path, e.to_string()))
}

/// Best-effort rewrite: on failure log a warning and keep the original bytes
pub fn rewrite_or_keep(file: &FileArtifact, new_name: &str) -> FileArtifact {
    match rewrite_descriptor(file, new_name) {
        Ok(data) => FileArtifact::new(file.path.clone(), data),
        Err(e) => {
            tracing::warn!("Failed to modify {}: {}", file.path, e);
            file.clone()
        }
    }
}

/// On failure returns the dotted path of the field whose parent is not a mapping
fn set_nested_string(
    root: &mut Mapping,
    fields: &[&str],
    value: &str,
) -> std::result::Result<(), String> {
    let Some((last, parents)) = fields.split_last() else {
        return Ok(());
    };

    let mut current = root;
    for (depth, field) in parents.iter().enumerate() {
        let slot = current
            .entry(Value::from(*field))
            .or_insert_with(|| Value::Mapping(Mapping::new()));
        if slot.is_null() {
            *slot = Value::Mapping(Mapping::new());
        }
        current = match slot {
            Value::Mapping(map) => map,
            _ => return Err(fields[..=depth].join(".")),
        };
    }

    current.insert(Value::from(*last), Value::from(value));
    Ok(())
}
