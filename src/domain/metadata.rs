//! `Chart.yaml` model
//!
//! Known fields are typed; anything else is kept in `extra` so that a chart
//! written back out loses nothing it was loaded with.
//!
//! Scalars such as `version: 1.10` are read as their source text. Unknown
//! fields come from a second, untyped pass over the document.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

/// Keys of `Chart.yaml` modelled by [`ChartMetadata`]
const CHART_FIELDS: &[&str] = &[
    "apiVersion",
    "name",
    "version",
    "kubeVersion",
    "description",
    "type",
    "keywords",
    "home",
    "sources",
    "dependencies",
    "maintainers",
    "icon",
    "appVersion",
    "deprecated",
    "annotations",
    "condition",
    "tags",
];

/// Keys of a dependency entry modelled by [`ChartDependency`]
const DEPENDENCY_FIELDS: &[&str] = &["name", "version", "repository", "alias", "condition", "tags"];

/// Chart metadata as stored in `Chart.yaml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartMetadata {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub api_version: String,

    pub name: String,

    pub version: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub kube_version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub chart_type: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub home: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<ChartDependency>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub maintainers: Vec<Maintainer>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,

    /// Fields this model does not know about
    #[serde(skip)]
    pub extra: BTreeMap<String, Value>,
}

/// A maintainer entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Maintainer {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A dependency declaration in `Chart.yaml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartDependency {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(skip)]
    pub extra: BTreeMap<String, Value>,
}

impl ChartDependency {
    /// Name the dependency is installed under (`alias` wins over `name`)
    pub fn effective_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}

#[cfg(test)]
impl ChartMetadata {
    /// Minimal metadata carrying only a chart name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            api_version: crate::config::CHART_API_VERSION.to_string(),
            name: name.into(),
            ..Self::default()
        }
    }
}

impl ChartMetadata {
    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, serde_yaml::Error> {
        let mut metadata: Self = serde_yaml::from_str(yaml)?;

        if let Value::Mapping(raw) = serde_yaml::from_str::<Value>(yaml)? {
            metadata.extra = unknown_fields(&raw, CHART_FIELDS);
            if let Some(Value::Sequence(raw_deps)) = raw.get("dependencies") {
                for (dep, raw_dep) in metadata.dependencies.iter_mut().zip(raw_deps) {
                    if let Value::Mapping(raw_dep) = raw_dep {
                        dep.extra = unknown_fields(raw_dep, DEPENDENCY_FIELDS);
                    }
                }
            }
        }

        Ok(metadata)
    }

    pub fn to_yaml(&self) -> std::result::Result<String, serde_yaml::Error> {
        let mut doc = serde_yaml::to_value(self)?;

        if let Value::Mapping(map) = &mut doc {
            append_fields(map, &self.extra);
            if let Some(Value::Sequence(raw_deps)) = map.get_mut("dependencies") {
                for (raw_dep, dep) in raw_deps.iter_mut().zip(&self.dependencies) {
                    if let Value::Mapping(raw_dep) = raw_dep {
                        append_fields(raw_dep, &dep.extra);
                    }
                }
            }
        }

        serde_yaml::to_string(&doc)
    }
}

fn unknown_fields(raw: &Mapping, known: &[&str]) -> BTreeMap<String, Value> {
    raw.iter()
        .filter_map(|(key, value)| {
            let key = key.as_str()?;
            (!known.contains(&key)).then(|| (key.to_string(), value.clone()))
        })
        .collect()
}

fn append_fields(map: &mut Mapping, extra: &BTreeMap<String, Value>) {
    for (key, value) in extra {
        map.insert(Value::from(key.as_str()), value.clone());
    }
}
