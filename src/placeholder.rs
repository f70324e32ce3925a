//! Recognition of `{{src/pp<suffix>.c}}` markers in template lines.

use regex::Regex;

use crate::constants::PLACEHOLDER_PATTERN;
use crate::error::Result;

/// A placeholder found on a template line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// Relative path of the source file, e.g. `src/ppMac.c`.
    pub source_path: String,
    /// The `<suffix>` part of the path, e.g. `Mac`.
    pub component: String,
}

/// Matches template lines against the placeholder pattern.
#[derive(Debug, Clone)]
pub struct PlaceholderMatcher {
    pattern: Regex,
}

impl PlaceholderMatcher {
    pub fn new() -> Result<Self> {
        Ok(Self { pattern: Regex::new(PLACEHOLDER_PATTERN)? })
    }

    /// Returns the first placeholder on `line`, if any.
    ///
    /// The marker may sit anywhere in the line; callers replace the whole
    /// line, so any text around the marker is discarded.
    pub fn find(&self, line: &str) -> Option<Placeholder> {
        let caps = self.pattern.captures(line)?;
        Some(Placeholder {
            source_path: caps[1].to_string(),
            component: caps[2].to_string(),
        })
    }
}

impl Placeholder {
    /// In-band diagnostic emitted when the source file does not exist.
    pub fn missing_diagnostic(&self) -> String {
        format!("#error {} is not yet implemented!", self.component)
    }
}
