// src/converter/declarations.rs
use regex::{NoExpand, Regex};
use std::sync::LazyLock;

use super::pattern;

static VAR_BLOCK: LazyLock<Regex> = LazyLock::new(|| pattern(r"(?s)VAR(.*?)END_VAR"));

/// One entry of a `VAR ... END_VAR` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    /// Initial value text as written after `:=`, if any.
    pub value: Option<String>,
}

/// Parses the body of a declaration block, one declaration per line.
///
/// A name declared twice keeps its first position and takes the later value.
pub fn parse_declarations(block: &str) -> Vec<Declaration> {
    let mut declarations: Vec<Declaration> = Vec::new();

    for line in block.trim().lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (declaration, value) = match line.split_once(":=") {
            Some((declaration, value)) => (declaration, Some(value.trim().to_string())),
            None => (line, None),
        };
        let name = declaration
            .split_once(':')
            .map_or(declaration, |(name, _)| name)
            .trim()
            .to_string();

        match declarations.iter_mut().find(|d| d.name == name) {
            Some(existing) => existing.value = value,
            None => declarations.push(Declaration { name, value }),
        }
    }

    declarations
}

/// Replaces every declaration block with plain assignments taken from the
/// first block. Undeclared initial values become `None`.
pub fn rewrite_declarations(st_code: &str) -> String {
    let Some(caps) = VAR_BLOCK.captures(st_code) else {
        return st_code.to_string();
    };

    let assignments: String = parse_declarations(&caps[1])
        .iter()
        .map(|d| format!("{} = {}\n", d.name, d.value.as_deref().unwrap_or("None")))
        .collect();

    VAR_BLOCK
        .replace_all(st_code, NoExpand(&assignments))
        .into_owned()
}
