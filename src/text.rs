//! Line helpers shared by the template and source passes.

/// Strips trailing ASCII whitespace and NUL bytes from `line`.
///
/// Only space, `\t`, `\n`, `\v`, `\f`, `\r` and `\0` are removed; other
/// Unicode whitespace such as U+00A0 or U+3000 is kept as content.
pub fn trim_line_end(line: &str) -> &str {
    line.trim_end_matches(|c: char| matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r' | '\0'))
}
