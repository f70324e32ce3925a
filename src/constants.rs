//! Common constants used throughout ppgen.

/// Template read when no `--template` is given.
pub const DEFAULT_TEMPLATE: &str = "tools/template.c";

/// Merged output written when no `--output` is given.
pub const DEFAULT_OUTPUT: &str = "pp.c";

/// Directory placeholder paths are resolved against by default.
pub const DEFAULT_ROOT: &str = ".";

/// Placeholder marker: `{{src/pp<suffix>.c}}`.
/// Group 1 is the relative source path, group 2 the component suffix.
/// The suffix excludes ASCII whitespace only.
pub const PLACEHOLDER_PATTERN: &str = r"\{\{(src/pp([^ \t\r\n\x0B\x0C]+)\.c)\}\}";

/// Include directive that ends the header of a source file.
pub const HEADER_INCLUDE_PATTERN: &str = r#"^#include "pp(Common)?\.[hc]""#;
