// src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod cli;
pub mod input;
pub mod output;
pub mod preset;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
