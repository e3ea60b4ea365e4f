//! Domain models for crdsplit
//!
//! This module contains the in-memory chart tree and the identity of
//! schema-definition documents. These types carry no I/O.

pub mod bundle;
pub mod key;
pub mod metadata;

pub use bundle::{BundleNode, FileArtifact};
pub use key::IdentityKey;
pub use metadata::{ChartDependency, ChartMetadata};
