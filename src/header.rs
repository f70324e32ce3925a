//! Header-skip rule applied to every inlined source file.
//!
//! Each source file starts with an include of `pp.h`, `pp.c`, `ppCommon.h`
//! or `ppCommon.c` so it can be compiled on its own. That include and every
//! line before it are left out of the merged output.

use regex::Regex;

use crate::constants::HEADER_INCLUDE_PATTERN;
use crate::error::Result;
use crate::text::trim_line_end;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SkipState {
    Skipping,
    Copying,
}

/// Outcome of applying the header-skip rule to one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderSkip {
    /// The include line was found; holds the lines after it.
    Body(Vec<String>),
    /// No qualifying include line: the file contributes nothing.
    NoInclude,
}

#[derive(Debug, Clone)]
pub struct HeaderSkipper {
    include: Regex,
}

impl HeaderSkipper {
    pub fn new() -> Result<Self> {
        Ok(Self { include: Regex::new(HEADER_INCLUDE_PATTERN)? })
    }

    /// Whether `line` is a qualifying include directive.
    pub fn is_header_include(&self, line: &str) -> bool {
        self.include.is_match(line)
    }

    /// Drops everything up to and including the first qualifying include
    /// line and returns the remaining lines with trailing whitespace removed.
    pub fn apply(&self, content: &str) -> HeaderSkip {
        let mut state = SkipState::Skipping;
        let mut body = Vec::new();

        for line in content.lines() {
            match state {
                SkipState::Skipping => {
                    if self.is_header_include(line) {
                        state = SkipState::Copying;
                    }
                }
                SkipState::Copying => body.push(trim_line_end(line).to_string()),
            }
        }

        match state {
            SkipState::Skipping => HeaderSkip::NoInclude,
            SkipState::Copying => HeaderSkip::Body(body),
        }
    }
}
