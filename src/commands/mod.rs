//! Command implementations for crdsplit CLI

pub mod completions;
pub mod crd_less;
pub mod crd_only;
