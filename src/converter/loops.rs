// src/converter/loops.rs
use regex::Regex;
use std::sync::LazyLock;

use super::pattern;

static FOR_LOOP: LazyLock<Regex> = LazyLock::new(|| {
    pattern(r"(?s)FOR\s+(.*?)\s*:=\s*(.*?)\s+TO\s+(.*?)\s+DO\s+(.*?)\s+END_FOR")
});
static WHILE_HEADER: LazyLock<Regex> = LazyLock::new(|| pattern(r"(?i)WHILE\s+(.*?)\s+DO"));
static END_WHILE: LazyLock<Regex> = LazyLock::new(|| pattern(r"(?i)END_WHILE"));
static REPEAT_LOOP: LazyLock<Regex> = LazyLock::new(|| {
    pattern(r"(?s)REPEAT\s*\n(.*?)\n\s*UNTIL\s+(.*?)\s+END_REPEAT")
});

/// Rewrites `FOR`, `WHILE` and `REPEAT ... UNTIL` loops.
pub fn convert_loops(st_code: &str) -> String {
    // FOR bounds are inclusive in ST.
    let code = FOR_LOOP.replace_all(st_code, "for ${1} in range(${2}, ${3} + 1):\n    ${4}\n");

    let code = WHILE_HEADER.replace_all(&code, "while ${1}:");
    let code = END_WHILE.replace_all(&code, "");

    REPEAT_LOOP
        .replace_all(&code, "while not (${2}):\n${1}\n")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_loop() {
        let st = "FOR i := 1 TO 10 DO\n    total := total + i;\nEND_FOR;";

        assert_eq!(
            convert_loops(st),
            "for i in range(1, 10 + 1):\n    total := total + i;\n;"
        );
    }

    #[test]
    fn test_while_loop() {
        let st = "WHILE x < 5 DO\n    x := x + 1;\nEND_WHILE;";

        assert_eq!(convert_loops(st), "while x < 5:\n    x := x + 1;\n;");
    }

    #[test]
    fn test_repeat_loop() {
        let st = "REPEAT\n    x := x + 1;\nUNTIL x > 5 END_REPEAT;";

        assert_eq!(convert_loops(st), "while not (x > 5):\n    x := x + 1;\n;");
    }

    #[test]
    fn test_lowercase_for_is_left_alone() {
        let st = "for i := 1 to 3 do x := i; end_for";

        assert_eq!(convert_loops(st), st);
    }
}
