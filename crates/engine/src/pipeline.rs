use std::borrow::Cow;

use list_tidy_domain::{
    ProcessResult, ProcessingOptions,
    text::{convert_case, deduplicate_lines, join_lines, remove_empty_lines, sort_lines, split_lines},
};
use list_tidy_shared_kernel::{ByteSize, LineCount};
use log::{debug, warn};

use crate::config::Config;
use crate::error::{EngineError, Result};

/// Run the list pipeline over `text`.
///
/// Stages always run in this order, each only when enabled:
/// case conversion, empty-line removal, deduplication, sort.
/// Converting case first lets `Apple`/`apple` collapse under lowercasing.
///
/// # Errors
///
/// Returns [`EngineError::InputTooLarge`] when `text` is larger than
/// `config.max_input_bytes`; nothing is processed in that case.
pub fn process_list(text: &str, config: &Config) -> Result<ProcessResult> {
    let size = ByteSize::of_str(text);
    if size > config.max_input_bytes {
        warn!("rejecting input of {size:#}: limit is {:#}", config.max_input_bytes);
        return Err(EngineError::InputTooLarge { size, max: config.max_input_bytes });
    }

    let opts = config.options;
    let mut lines: Vec<Cow<'_, str>> = split_lines(text).into_iter().map(Cow::Borrowed).collect();
    let input_line_count = count(&lines);
    debug!("pipeline start: {input_line_count} lines, {size} bytes, {opts:?}");

    if !opts.case_conversion.is_none() {
        let mode = opts.case_conversion;
        lines = lines.into_iter().map(|line| Cow::Owned(convert_case(&line, mode))).collect();
        debug!("case conversion: {mode}");
    }

    let mut empty_lines_removed = LineCount::zero();
    if opts.remove_empty_lines {
        let before = count(&lines);
        lines = remove_empty_lines(lines);
        empty_lines_removed = before.removed_to(count(&lines));
        debug!("empty-line removal: dropped {empty_lines_removed}");
    }

    let mut duplicates_removed = LineCount::zero();
    if opts.remove_duplicates {
        let before = count(&lines);
        lines = deduplicate_lines(lines);
        duplicates_removed = before.removed_to(count(&lines));
        debug!("deduplication: dropped {duplicates_removed}");
    }

    let sorted = !opts.sort_direction.is_none();
    if sorted {
        lines = sort_lines(lines, opts.sort_direction);
        debug!("sort: {}", opts.sort_direction);
    }

    Ok(ProcessResult {
        output: join_lines(&lines),
        input_line_count,
        output_line_count: count(&lines),
        duplicates_removed,
        empty_lines_removed,
        sorted,
        case_conversion: opts.case_conversion,
    })
}

/// [`process_list`] with the default 10 MiB ceiling.
pub fn process_list_with_defaults(text: &str, options: &ProcessingOptions) -> Result<ProcessResult> {
    process_list(text, &Config::new(*options))
}

#[inline]
fn count<T>(lines: &[T]) -> LineCount {
    LineCount::new(lines.len())
}
