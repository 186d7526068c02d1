// crates/domain/src/model.rs
use list_tidy_shared_kernel::LineCount;
use serde::{Deserialize, Serialize};

use crate::options::CaseConversion;

/// Output text and statistics of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessResult {
    pub output: String,
    pub input_line_count: LineCount,
    pub output_line_count: LineCount,
    pub duplicates_removed: LineCount,
    pub empty_lines_removed: LineCount,
    pub sorted: bool,
    pub case_conversion: CaseConversion,
}

impl ProcessResult {
    /// Total lines dropped by the filtering stages.
    pub fn lines_removed(&self) -> LineCount {
        self.duplicates_removed + self.empty_lines_removed
    }

    /// One-line human summary, e.g. `5 -> 3 lines (1 duplicate, 1 empty removed)`.
    pub fn summary(&self) -> String {
        let mut summary = format!(
            "{} -> {} lines ({} duplicate, {} empty removed)",
            self.input_line_count, self.output_line_count, self.duplicates_removed, self.empty_lines_removed
        );
        if self.sorted {
            summary.push_str(", sorted");
        }
        if !self.case_conversion.is_none() {
            summary.push_str(", case: ");
            summary.push_str(self.case_conversion.as_str());
        }
        summary
    }
}
