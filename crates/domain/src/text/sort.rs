// crates/domain/src/text/sort.rs
use std::cmp::Ordering;

use feruca::{Collator, Tailoring};

use crate::options::SortDirection;

/// Root-locale Unicode collator, tertiary strength, lowercase first.
///
/// Punctuation and symbols are non-ignorable, so they sort ahead of digits
/// and letters instead of being skipped. Strings that collate equal fall
/// back to a byte comparison, which keeps the order total.
fn collator() -> Collator {
    Collator::new(Tailoring::default(), false, true)
}

/// Locale-aware comparison of two lines; a total order consistent with `==`.
pub fn compare_lines(a: &str, b: &str) -> Ordering {
    collator().collate(a, b)
}

/// Sorts lines ascending or descending. `SortDirection::None` returns the
/// input untouched.
///
/// Descending is the exact reverse of the ascending result.
pub fn sort_lines<S: AsRef<str>>(mut lines: Vec<S>, direction: SortDirection) -> Vec<S> {
    if direction.is_none() || lines.len() < 2 {
        return lines;
    }
    let mut collator = collator();
    lines.sort_by(|a, b| collator.collate(a.as_ref(), b.as_ref()));
    if matches!(direction, SortDirection::Descending) {
        lines.reverse();
    }
    lines
}
