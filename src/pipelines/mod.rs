//! Pipelines.
//!
//! The module provides a light [pipeline::Pipeline] trait
//! and the dataset preparation pipeline.
#[allow(clippy::module_inception)]
pub mod pipeline;
pub mod prepare;

pub use pipeline::Pipeline;
pub use prepare::{PrepareConfig, PrepareDataset, RunSummary, StructuralTags};
