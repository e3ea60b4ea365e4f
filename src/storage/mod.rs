//! Chart storage
//!
//! Loading reads a chart directory or `.tgz` archive (with nested
//! dependencies) into a [`BundleNode`](crate::domain::BundleNode) tree;
//! saving writes a tree back out as a chart directory. Both are all-or-nothing
//! from the caller's point of view: any failure is fatal to the command.

pub mod archive;
pub mod load;
pub mod save;

pub use load::load_chart;
pub use save::save_chart;
