//! Reading gzip-compressed chart archives
//!
//! A chart archive holds a single top-level directory named after the chart.
//! That directory is stripped so paths come out relative to the chart root.

use std::io::Read;
use std::path::{Component, Path};

use flate2::read::GzDecoder;

use crate::domain::FileArtifact;
use crate::error::{Result, bundle};

/// File name suffixes recognized as chart archives
pub const ARCHIVE_SUFFIXES: &[&str] = &[".tgz", ".tar.gz"];

pub fn is_archive_name(name: &str) -> bool {
    ARCHIVE_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}

/// Unpack every regular file of a `.tgz` chart into memory
pub fn read_archive(data: &[u8], origin: &str) -> Result<Vec<FileArtifact>> {
    let mut archive = tar::Archive::new(GzDecoder::new(data));
    let entries = archive
        .entries()
        .map_err(|e| bundle::load_failed(origin, e.to_string()))?;

    let mut files = Vec::new();
    for entry in entries {
        let mut entry = entry.map_err(|e| bundle::load_failed(origin, e.to_string()))?;
        if !entry.header().entry_type().is_file() {
            continue;
        }

        let path = entry
            .path()
            .map_err(|e| bundle::load_failed(origin, e.to_string()))?
            .into_owned();
        let relative = strip_base_dir(&path).ok_or_else(|| {
            bundle::load_failed(
                origin,
                format!(
                    "chart illegally contains content outside the base directory: {}",
                    path.display()
                ),
            )
        })?;

        let mut data = Vec::new();
        entry
            .read_to_end(&mut data)
            .map_err(|e| bundle::load_failed(origin, e.to_string()))?;
        files.push(FileArtifact::new(relative, data));
    }

    if files.is_empty() {
        return Err(bundle::load_failed(origin, "archive contains no files"));
    }

    // Same order a sorted directory walk yields
    files.sort_by(|a, b| a.path.split('/').cmp(b.path.split('/')));
    Ok(files)
}

/// `kubedb/crds/a.yaml` -> `crds/a.yaml`; `None` for root-level or unsafe paths
fn strip_base_dir(path: &Path) -> Option<String> {
    let mut parts = Vec::new();
    for component in path.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
            Component::CurDir => {}
            _ => return None,
        }
    }

    if parts.len() < 2 {
        return None;
    }
    Some(parts[1..].join("/"))
}
