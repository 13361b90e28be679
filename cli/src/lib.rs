//! Shared plumbing for the `recommend-jobs` and `compute-embedding` binaries.

pub mod config;
pub mod logging;
pub mod output;

pub use config::{AppConfig, EmbeddingSettings};
