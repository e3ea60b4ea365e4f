//! Reserved names and layout conventions for chart splitting
//!
//! Every literal the transforms depend on lives here and is handed to each
//! component explicitly, so tests can run components with other layouts.

/// Path prefix of schema-definition files inside a chart
pub const CRDS_PREFIX: &str = "crds/";

/// `kind` value marking a schema-definition document
pub const CRD_KIND: &str = "CustomResourceDefinition";

/// Documentation descriptor rewritten with the new chart name
pub const DOC_DESCRIPTOR: &str = "doc.yaml";

/// Root files carried into the CRD-only chart, in output order
pub const DESCRIPTIVE_FILES: &[&str] = &[
    DOC_DESCRIPTOR,
    "README.md",
    "values.yaml",
    "values.schema.json",
    ".helmignore",
];

/// Shared template helpers carried into the CRD-only chart
///
/// Covers `templates/_helpers.tpl` and everything below `templates/_partials/`.
pub const HELPER_TEMPLATE_GLOBS: &[&str] = &["templates/_*", "templates/_*/**"];

/// Annotation holding the chart's display name
pub const NAME_ANNOTATION: &str = "charts.openshift.io/name";

pub const CRD_LESS_SUFFIX: &str = "-certified";
pub const CRD_ONLY_SUFFIX: &str = "-certified-crds";

/// Chart API version written into the assembled CRD-only chart
pub const CHART_API_VERSION: &str = "v2";

/// Layout conventions used by the loaders and transforms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitConfig {
    pub crds_prefix: String,
    pub crd_kind: String,
    pub doc_descriptor: String,
    pub descriptive_files: Vec<String>,
    pub helper_globs: Vec<String>,
    pub name_annotation: String,
    pub crd_less_suffix: String,
    pub crd_only_suffix: String,
    pub chart_api_version: String,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            crds_prefix: CRDS_PREFIX.to_string(),
            crd_kind: CRD_KIND.to_string(),
            doc_descriptor: DOC_DESCRIPTOR.to_string(),
            descriptive_files: DESCRIPTIVE_FILES.iter().map(ToString::to_string).collect(),
            helper_globs: HELPER_TEMPLATE_GLOBS.iter().map(ToString::to_string).collect(),
            name_annotation: NAME_ANNOTATION.to_string(),
            crd_less_suffix: CRD_LESS_SUFFIX.to_string(),
            crd_only_suffix: CRD_ONLY_SUFFIX.to_string(),
            chart_api_version: CHART_API_VERSION.to_string(),
        }
    }
}

impl SplitConfig {
    /// Whether a chart-relative path is stored as a schema-definition file
    pub fn is_schema_file(&self, path: &str) -> bool {
        path.starts_with(&self.crds_prefix)
    }

    /// Name of the CRD-less chart derived from `chart_name`
    pub fn crd_less_name(&self, chart_name: &str) -> String {
        format!("{}{}", chart_name, self.crd_less_suffix)
    }

    /// Name of the CRD-only chart derived from `chart_name`
    pub fn crd_only_name(&self, chart_name: &str) -> String {
        format!("{}{}", chart_name, self.crd_only_suffix)
    }
}
