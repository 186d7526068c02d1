// crates/domain/src/text/case.rs
use std::sync::OnceLock;

use regex::Regex;

use crate::options::CaseConversion;

pub fn convert_case(input: &str, mode: CaseConversion) -> String {
    match mode {
        CaseConversion::None => input.to_owned(),
        CaseConversion::Uppercase => input.to_uppercase(),
        CaseConversion::Lowercase => input.to_lowercase(),
        CaseConversion::Titlecase => to_title_case(input),
        CaseConversion::Camelcase => to_camel_case(input),
        CaseConversion::Snakecase => to_snake_case(input),
    }
}

/// Uppercases the first character after every word boundary.
///
/// Word characters are ASCII letters, digits and `_`; everything else is a
/// boundary, so `don't` becomes `Don'T`. Other characters are left as-is.
pub fn to_title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_word = false;
    for ch in input.chars() {
        let is_word = ch.is_ascii_alphanumeric() || ch == '_';
        if is_word && !in_word {
            out.push(ch.to_ascii_uppercase());
        } else {
            out.push(ch);
        }
        in_word = is_word;
    }
    out
}

/// `hello world` -> `helloWorld`. Words are split on whitespace, `-` and `_`.
pub fn to_camel_case(input: &str) -> String {
    static SEPARATORS: OnceLock<Regex> = OnceLock::new();
    let re = SEPARATORS.get_or_init(|| Regex::new(r"[\s\-_]+").unwrap());

    let mut out = String::with_capacity(input.len());
    for (idx, word) in re.split(input).enumerate() {
        if idx == 0 {
            out.push_str(&word.to_lowercase());
            continue;
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(&chars.as_str().to_lowercase());
        }
    }
    out
}

/// `helloWorld` / `Hello World` / `hello-world` -> `hello_world`.
pub fn to_snake_case(input: &str) -> String {
    static CAMEL_HUMP: OnceLock<Regex> = OnceLock::new();
    static SPACE_OR_HYPHEN: OnceLock<Regex> = OnceLock::new();
    static UNDERSCORE_RUN: OnceLock<Regex> = OnceLock::new();
    let hump = CAMEL_HUMP.get_or_init(|| Regex::new(r"([a-z])([A-Z])").unwrap());
    let separators = SPACE_OR_HYPHEN.get_or_init(|| Regex::new(r"[\s\-]+").unwrap());
    let underscores = UNDERSCORE_RUN.get_or_init(|| Regex::new(r"_+").unwrap());

    let split = hump.replace_all(input, "${1} ${2}");
    let joined = separators.replace_all(&split, "_").to_lowercase();
    let collapsed = underscores.replace_all(&joined, "_");

    let trimmed = collapsed.strip_prefix('_').unwrap_or(&collapsed);
    let trimmed = trimmed.strip_suffix('_').unwrap_or(trimmed);
    trimmed.to_owned()
}
