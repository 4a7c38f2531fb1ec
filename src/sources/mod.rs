//! Corpus sources.
pub mod walker;

pub use walker::{Progress, Walker};
