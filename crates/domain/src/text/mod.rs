//! Leaf transforms over a list of lines.
//!
//! Every function here is pure and total: any input, including the empty
//! string or an empty list, has a defined output.

mod case;
mod dedup;
mod lines;
mod sort;

pub use case::{convert_case, to_camel_case, to_snake_case, to_title_case};
pub use dedup::deduplicate_lines;
pub use lines::{join_lines, remove_empty_lines, split_lines};
pub use sort::{compare_lines, sort_lines};
