// src/converter/mod.rs

//! Rule-based rewriting of IEC 61131-3 Structured Text into Python.
//!
//! The conversion is a fixed pipeline of textual passes. Each pass works on
//! the output of the previous one, so later passes see already-rewritten
//! keywords (the CASE pass, for instance, sees `else:` rather than `ELSE`).

use regex::Regex;

pub mod cases;
pub mod cleanup;
pub mod conditionals;
pub mod declarations;
pub mod loops;

/// Compiles one of the converter's built-in patterns.
pub(crate) fn pattern(re: &str) -> Regex {
    Regex::new(re).unwrap_or_else(|e| panic!("invalid built-in pattern {re:?}: {e}"))
}

/// Converts a Structured Text program into Python source text.
pub fn convert_st_to_python(st_code: &str) -> String {
    let code = declarations::rewrite_declarations(st_code);
    let code = conditionals::convert_ifs(&code);
    let code = loops::convert_loops(&code);
    let code = cases::convert_cases(&code);
    cleanup::clean_up_python_code(&code)
}
