// src/converter/cases.rs
use regex::{Captures, Regex};
use std::sync::LazyLock;

use super::pattern;

static CASE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"(?is)CASE\s+(.*?)\s+OF(.*?)END_CASE;"));

/// One selector arm of a CASE statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseArm {
    /// Python pattern for the arm; `_` for the default arm.
    pub label: String,
    pub body: Vec<String>,
}

/// Rewrites `CASE e OF ... END_CASE;` into a Python `match` statement.
pub fn convert_cases(st_code: &str) -> String {
    CASE_BLOCK
        .replace_all(st_code, |caps: &Captures| {
            render_match(caps[1].trim(), &parse_arms(caps[2].trim()))
        })
        .into_owned()
}

/// Splits a CASE body into arms. A line opening with `label:` starts a new
/// arm; any other line continues the current one.
pub fn parse_arms(block: &str) -> Vec<CaseArm> {
    let mut arms: Vec<CaseArm> = Vec::new();

    for line in block.lines().map(str::trim).filter(|l| !l.is_empty()) {
        match split_label(line) {
            Some((label, rest)) => arms.push(CaseArm {
                label,
                body: statements(rest),
            }),
            None => match arms.last_mut() {
                Some(arm) => arm.body.extend(statements(line)),
                None => log::debug!("Dropping CASE line outside of any arm: {}", line),
            },
        }
    }

    arms
}

fn render_match(selector: &str, arms: &[CaseArm]) -> String {
    let mut python = format!("match {}:\n", selector);
    for arm in arms {
        python.push_str(&format!("    case {}:\n", arm.label));
        if arm.body.is_empty() {
            python.push_str("        pass\n");
        }
        for statement in &arm.body {
            python.push_str(&format!("        {}\n", statement));
        }
    }
    python
}

/// Returns the arm label and the remainder of the line, if the line opens an
/// arm.
fn split_label(line: &str) -> Option<(String, &str)> {
    if let Some(idx) = line.find(':') {
        let (label, rest) = (line[..idx].trim(), &line[idx + 1..]);
        if !rest.starts_with('=') && is_label(label) {
            let label = if label.eq_ignore_ascii_case("else") {
                "_".to_string()
            } else {
                label.to_string()
            };
            return Some((label, rest));
        }
    }

    // A bare ELSE that hasn't been through the conditional pass.
    let head = line.get(..4)?;
    let boundary = line[4..]
        .chars()
        .next()
        .is_none_or(|c| !(c.is_alphanumeric() || c == '_'));
    if head.eq_ignore_ascii_case("else") && boundary {
        return Some(("_".to_string(), &line[4..]));
    }

    None
}

/// Labels are comma separated literals or identifiers, e.g. `1`, `2, 3`,
/// `1..5` or `Color.Red`.
fn is_label(label: &str) -> bool {
    !label.is_empty()
        && label.split(',').map(str::trim).all(|part| {
            !part.is_empty()
                && part
                    .chars()
                    .all(|c| c.is_alphanumeric() || matches!(c, '_' | '.' | '#' | '\'' | '-' | '+'))
        })
}

fn statements(code: &str) -> Vec<String> {
    code.lines()
        .map(|l| l.replace([':', ';'], "").trim().to_string())
        .filter(|l| !l.is_empty())
        .collect()
}
