// crates/engine/src/lib.rs
pub mod config;
pub mod error;
pub mod pipeline;

pub use crate::config::{Config, ConfigBuilder, DEFAULT_MAX_INPUT};
pub use crate::error::{EngineError, Result};
pub use crate::pipeline::{process_list, process_list_with_defaults};
