use std::path::PathBuf;

use clap::{Parser, ValueHint};

use super::{
    parsers::SizeArg,
    value_enum::{CliCaseConversion, CliOutputFormat, CliSortDirection},
};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "list_tidy",
    version = crate::VERSION,
    about = "Clean up a line list: convert case, drop blank lines, deduplicate and sort",
    long_about = "Clean up a line list.\n\nStages run in a fixed order: case conversion, \
                  blank-line removal, deduplication, sort. Each stage only runs when enabled."
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Input file (reads standard input when omitted or `-`)
    #[arg(value_hint = ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// Case conversion applied to every line
    #[arg(long, value_enum, help_heading = "Transform")]
    pub case: Option<CliCaseConversion>,

    /// Sort direction for the final list
    #[arg(long, value_enum, help_heading = "Transform")]
    pub sort: Option<CliSortDirection>,

    /// Keep only the first occurrence of each line
    #[arg(long, help_heading = "Transform")]
    pub dedup: bool,

    /// Drop empty and whitespace-only lines
    #[arg(long, help_heading = "Transform")]
    pub remove_empty: bool,

    /// JSON or YAML file with processing options; flags override its fields
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "Transform")]
    pub preset: Option<PathBuf>,

    /// Largest accepted input (e.g. 512K, 10M); defaults to 10 MiB
    #[arg(long, help_heading = "Limits")]
    pub max_size: Option<SizeArg>,

    /// Output format
    #[arg(long, value_enum, default_value = "text", help_heading = "Output")]
    pub format: CliOutputFormat,

    /// Print a one-line statistics summary to stderr
    #[arg(long, help_heading = "Output")]
    pub stats: bool,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}
