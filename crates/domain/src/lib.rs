//! # Domain
//!
//! Pure line-list logic with no I/O:
//!
//! - [`options`]: case conversion modes and sort directions
//! - [`config`]: the per-call [`ProcessingOptions`] record
//! - [`model`]: the [`ProcessResult`] record returned by the pipeline
//! - [`text`]: the leaf transforms (case, blank-line filter, dedup, sort)

#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod model;
pub mod options;
pub mod text;

pub use config::ProcessingOptions;
pub use model::ProcessResult;
pub use options::{CaseConversion, SortDirection};
