// crates/domain/src/config.rs
use serde::{Deserialize, Serialize};

use crate::options::{CaseConversion, SortDirection};

/// Transformations requested for one pipeline run.
///
/// The four fields are independent; the order they are applied in is fixed
/// by the engine, not by this record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProcessingOptions {
    pub remove_duplicates: bool,
    pub sort_direction: SortDirection,
    pub case_conversion: CaseConversion,
    pub remove_empty_lines: bool,
}

impl ProcessingOptions {
    /// True when the run can only keep or drop lines, never add them.
    pub const fn removes_lines(&self) -> bool {
        self.remove_duplicates || self.remove_empty_lines
    }

    /// True when no stage would change the input.
    pub const fn is_identity(&self) -> bool {
        !self.removes_lines() && self.sort_direction.is_none() && self.case_conversion.is_none()
    }
}
