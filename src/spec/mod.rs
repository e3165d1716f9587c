//! Spec layer: JSON shapes handed over by the deployment tooling.
//!
//! This module owns the raw serde structures only; presence validation
//! and query assembly live in `build`.

pub mod alias;

pub use alias::{AliasSpec, AliasesSpec, TargetSpec};
