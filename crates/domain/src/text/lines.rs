// crates/domain/src/text/lines.rs

/// Splits text into lines on `\n`, dropping the `\r` of a CRLF break.
///
/// An empty input has no lines; otherwise a trailing break yields a
/// trailing empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line)).collect()
}

pub fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let capacity = lines.iter().map(|l| l.as_ref().len() + 1).sum::<usize>();
    let mut out = String::with_capacity(capacity);
    for (idx, line) in lines.iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        out.push_str(line.as_ref());
    }
    out
}

/// Drops every line that is empty after trimming whitespace.
pub fn remove_empty_lines<S: AsRef<str>>(mut lines: Vec<S>) -> Vec<S> {
    lines.retain(|line| !line.as_ref().trim().is_empty());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_blank_and_whitespace_only_lines() {
        let lines = vec!["apple", "  ", "banana", "", "cherry"];
        assert_eq!(remove_empty_lines(lines), vec!["apple", "banana", "cherry"]);
    }

    #[test]
    fn keeps_lines_with_surrounding_whitespace() {
        let lines = vec!["\t", " kept ", "\u{3000}"];
        assert_eq!(remove_empty_lines(lines), vec![" kept "]);
    }

    #[test]
    fn empty_text_has_no_lines() {
        assert!(split_lines("").is_empty());
        assert_eq!(split_lines("\n"), vec!["", ""]);
        assert_eq!(split_lines("one"), vec!["one"]);
    }

    #[test]
    fn crlf_breaks_are_stripped() {
        assert_eq!(split_lines("a\r\nb\r\n"), vec!["a", "b", ""]);
        assert_eq!(split_lines("a\rb"), vec!["a\rb"]);
    }

    #[test]
    fn join_is_inverse_of_split_for_lf_text() {
        let text = "apple\n\nbanana\n";
        assert_eq!(join_lines(&split_lines(text)), text);
        assert_eq!(join_lines::<&str>(&[]), "");
    }
}
