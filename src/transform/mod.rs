//! Chart tree transforms
//!
//! Every transform here is a pure function over a loaded `BundleNode`:
//! - [`extract`]: identity of a CRD document
//! - [`strip`]: remove CRDs from every level of a tree
//! - [`collect`]: gather deduplicated CRDs from a whole tree
//! - [`select`]: pick descriptive files from the root chart
//! - [`rewrite`]: rename inside `doc.yaml`
//! - [`assemble`]: build the flat CRD-only chart

pub mod assemble;
pub mod collect;
pub mod extract;
pub mod rewrite;
pub mod select;
pub mod strip;

pub use assemble::assemble_crd_only;
pub use collect::collect_crds;
pub use rewrite::rewrite_or_keep;
pub use select::select_descriptive_files;
pub use strip::strip_crds;
