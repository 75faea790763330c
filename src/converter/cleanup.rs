// src/converter/cleanup.rs
use regex::Regex;
use std::sync::LazyLock;

use super::pattern;

static BLANK_RUNS: LazyLock<Regex> = LazyLock::new(|| pattern(r"\n\s*\n{2,}"));

/// Remaining keyword and operator substitutions, applied in order.
const SUBSTITUTIONS: &[(&str, &str)] = &[
    ("RETURN", "return"),
    ("EXIT", "break"),
    ("ELSIF", "elif"),
    ("ELSEIF", "elif"),
    ("false", "False"),
    ("true", "True"),
    (":=", "="),
    (";", ""),
];

/// Final pass: keyword and operator substitutions, then whitespace tidying.
/// The result always ends with exactly one newline.
pub fn clean_up_python_code(code: &str) -> String {
    let code = SUBSTITUTIONS
        .iter()
        .fold(code.to_string(), |acc, &(from, to)| acc.replace(from, to));

    let mut code = code.trim().to_string();
    code.push('\n');

    BLANK_RUNS.replace_all(&code, "\n\n").into_owned()
}
