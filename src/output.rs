use std::io::Write;

use comfy_table::{Table, presets::UTF8_FULL};
use list_tidy_domain::ProcessResult;
use list_tidy_shared_kernel::Result;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
    Table,
}

/// Write `result` to `out` in the requested format.
///
/// # Errors
///
/// Propagates write and serialization failures.
pub fn emit<W: Write>(out: &mut W, result: &ProcessResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => write_text(out, result)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, result)?;
            writeln!(out)?;
        }
        OutputFormat::Yaml => serde_yaml::to_writer(&mut *out, result)?,
        OutputFormat::Table => {
            write_text(out, result)?;
            if !result.output.is_empty() {
                writeln!(out)?;
            }
            writeln!(out, "{}", stats_table(result))?;
        }
    }
    out.flush()?;
    Ok(())
}

fn write_text<W: Write>(out: &mut W, result: &ProcessResult) -> std::io::Result<()> {
    if result.output.is_empty() {
        return Ok(());
    }
    writeln!(out, "{}", result.output)
}

fn stats_table(result: &ProcessResult) -> Table {
    let yes_no = |flag: bool| if flag { "yes" } else { "no" };

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["Metric", "Value"]);
    table.add_row(vec!["Input lines".to_string(), result.input_line_count.to_string()]);
    table.add_row(vec!["Output lines".to_string(), result.output_line_count.to_string()]);
    table.add_row(vec!["Duplicates removed".to_string(), result.duplicates_removed.to_string()]);
    table.add_row(vec!["Empty lines removed".to_string(), result.empty_lines_removed.to_string()]);
    table.add_row(vec!["Sorted".to_string(), yes_no(result.sorted).to_string()]);
    table.add_row(vec!["Case conversion".to_string(), result.case_conversion.to_string()]);
    table
}
