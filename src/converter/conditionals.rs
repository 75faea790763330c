// src/converter/conditionals.rs
use regex::Regex;
use std::sync::LazyLock;

use super::pattern;

static ELSIF: LazyLock<Regex> = LazyLock::new(|| pattern(r"(?i)ELSIF\s+(.*?)\s+THEN"));
static ELSEIF: LazyLock<Regex> = LazyLock::new(|| pattern(r"(?i)ELSEIF\s+(.*?)\s+THEN"));
static IF: LazyLock<Regex> = LazyLock::new(|| pattern(r"(?i)IF\s+(.*?)\s+THEN"));
static ELSE: LazyLock<Regex> = LazyLock::new(|| pattern(r"(?i)ELSE"));
static END_IF: LazyLock<Regex> = LazyLock::new(|| pattern(r"(?i)END_IF"));

/// Rewrites `IF`/`ELSIF`/`ELSE` headers and drops `END_IF`.
///
/// `ELSIF` has to go before `IF`, otherwise its tail would be taken for a
/// plain `IF`.
pub fn convert_ifs(st_code: &str) -> String {
    let code = ELSIF.replace_all(st_code, "elif ${1}:");
    let code = ELSEIF.replace_all(&code, "elif ${1}:");
    let code = IF.replace_all(&code, "if ${1}:");
    let code = ELSE.replace_all(&code, "else:");
    END_IF.replace_all(&code, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_if_elsif_else() {
        let st = "IF x > 0 THEN\n    y := 1;\nELSIF x < 0 THEN\n    y := 2;\nELSE\n    y := 0;\nEND_IF;";

        assert_eq!(
            convert_ifs(st),
            "if x > 0:\n    y := 1;\nelif x < 0:\n    y := 2;\nelse:\n    y := 0;\n;"
        );
    }

    #[test]
    fn test_keywords_are_case_insensitive() {
        assert_eq!(convert_ifs("if ready then\n  go();\nend_if"), "if ready:\n  go();\n");
        assert_eq!(convert_ifs("ElseIf a = 1 Then"), "elif a = 1:");
    }

    #[test]
    fn test_then_on_next_line() {
        assert_eq!(convert_ifs("IF a\nTHEN\n  b := 1;"), "if a:\n  b := 1;");
    }

    #[test]
    fn test_condition_does_not_span_lines() {
        assert_eq!(convert_ifs("IF a\nAND b THEN"), "IF a\nAND b THEN");
    }
}
