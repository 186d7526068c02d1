// crates/domain/src/text/dedup.rs
use std::collections::HashSet;

/// Keeps the first occurrence of each distinct line, in original order.
///
/// Comparison is exact; `Apple` and `apple` are different lines.
pub fn deduplicate_lines<S: AsRef<str>>(lines: Vec<S>) -> Vec<S> {
    let keep: Vec<bool> = {
        let mut seen = HashSet::with_capacity(lines.len());
        lines.iter().map(|line| seen.insert(line.as_ref())).collect()
    };

    lines.into_iter().zip(keep).filter_map(|(line, first)| first.then_some(line)).collect()
}
