mod args;
mod parsers;
mod value_enum;

pub use args::Args;
pub use parsers::SizeArg;
pub use value_enum::{CliCaseConversion, CliOutputFormat, CliSortDirection};

use list_tidy_domain::ProcessingOptions;
use list_tidy_engine::{Config, ConfigBuilder, DEFAULT_MAX_INPUT};
use list_tidy_shared_kernel::{ByteSize, PresentationError, Result};

use crate::preset;

fn validate_max_size(max_size: Option<SizeArg>) -> Result<()> {
    if let Some(SizeArg(size)) = max_size
        && size == ByteSize::zero()
    {
        return Err(PresentationError::InvalidValue {
            flag: "--max-size".to_string(),
            value: size.to_string(),
            reason: "must be at least 1 byte".to_string(),
        }
        .into());
    }
    Ok(())
}

/// Layer explicit flags on top of the preset (or the defaults).
fn merge_options(args: &Args, base: ProcessingOptions) -> ProcessingOptions {
    ProcessingOptions {
        remove_duplicates: base.remove_duplicates || args.dedup,
        sort_direction: args.sort.map_or(base.sort_direction, Into::into),
        case_conversion: args.case.map_or(base.case_conversion, Into::into),
        remove_empty_lines: base.remove_empty_lines || args.remove_empty,
    }
}

/// Convert parsed CLI arguments into an engine configuration.
///
/// # Errors
///
/// Returns `Err` when `--max-size` is zero, when the preset file cannot be
/// read or parsed, or when the engine `Config` cannot be built.
pub fn build_config(args: &Args) -> Result<Config> {
    validate_max_size(args.max_size)?;

    let base = match &args.preset {
        Some(path) => preset::load_preset(path)?,
        None => ProcessingOptions::default(),
    };
    let options = merge_options(args, base);
    let max_input_bytes = args.max_size.map_or(DEFAULT_MAX_INPUT, |s| s.0);

    ConfigBuilder::default()
        .options(options)
        .max_input_bytes(max_input_bytes)
        .build()
        .map_err(|e| PresentationError::ConfigBuildFailed(e.to_string()).into())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;
    use list_tidy_domain::{CaseConversion, SortDirection};
    use list_tidy_shared_kernel::ListTidyError;

    use super::*;

    #[test]
    fn defaults_are_identity_with_ten_mib_limit() {
        let args = Args::parse_from(["list_tidy"]);
        let config = build_config(&args).expect("config builds");
        assert!(config.options.is_identity());
        assert_eq!(config.max_input_bytes, DEFAULT_MAX_INPUT);
    }

    #[test]
    fn flags_map_onto_processing_options() {
        let args = Args::parse_from([
            "list_tidy",
            "--case",
            "lowercase",
            "--sort",
            "desc",
            "--dedup",
            "--remove-empty",
            "--max-size",
            "1K",
        ]);
        let config = build_config(&args).expect("config builds");
        assert_eq!(config.options.case_conversion, CaseConversion::Lowercase);
        assert_eq!(config.options.sort_direction, SortDirection::Descending);
        assert!(config.options.remove_duplicates);
        assert!(config.options.remove_empty_lines);
        assert_eq!(config.max_input_bytes, ByteSize::kib(1));
    }

    #[test]
    fn flags_override_preset_fields() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().expect("temp file");
        write!(file, r#"{{"sortDirection":"asc","caseConversion":"uppercase","removeEmptyLines":true}}"#)
            .expect("write preset");

        let path = file.path().to_str().expect("utf-8 temp path");
        let args = Args::parse_from(["list_tidy", "--preset", path, "--case", "snakecase"]);
        let config = build_config(&args).expect("config builds");
        assert_eq!(config.options.case_conversion, CaseConversion::Snakecase);
        assert_eq!(config.options.sort_direction, SortDirection::Ascending);
        assert!(config.options.remove_empty_lines);
        assert!(!config.options.remove_duplicates);
    }

    #[test]
    fn zero_max_size_is_rejected() {
        let args = Args::parse_from(["list_tidy", "--max-size", "0"]);
        let err = build_config(&args).unwrap_err();
        if let ListTidyError::Presentation(PresentationError::InvalidValue { flag, value, .. }) = err {
            assert_eq!(flag, "--max-size");
            assert_eq!(value, "0");
        } else {
            panic!("unexpected error variant: {err:?}");
        }
    }
}
