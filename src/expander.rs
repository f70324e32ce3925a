//! Single-pass template expansion.
//! Each template line is either passed through or, when it carries a
//! placeholder, replaced by the referenced source file's body.

use log::{debug, warn};

use crate::{
    error::Result,
    header::{HeaderSkip, HeaderSkipper},
    placeholder::{Placeholder, PlaceholderMatcher},
    source::SourceProvider,
    text::trim_line_end,
};

/// What happened to a single placeholder line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The source file was inlined; holds the number of lines contributed.
    Expanded { lines: usize },
    /// The source file does not exist; an `#error` line was emitted.
    Missing,
    /// The source file has no qualifying include line and was dropped.
    NoInclude,
}

/// Counts gathered over one expansion pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionReport {
    /// Template lines copied through unchanged.
    pub passthrough: usize,
    /// Placeholders whose source file was inlined.
    pub expanded: usize,
    /// Components whose source file does not exist.
    pub missing: Vec<String>,
    /// Source paths dropped because they have no include line.
    pub dropped: Vec<String>,
}

impl ExpansionReport {
    fn record(&mut self, placeholder: &Placeholder, resolution: &Resolution) {
        match resolution {
            Resolution::Expanded { .. } => self.expanded += 1,
            Resolution::Missing => self.missing.push(placeholder.component.clone()),
            Resolution::NoInclude => self.dropped.push(placeholder.source_path.clone()),
        }
    }

    pub fn placeholders(&self) -> usize {
        self.expanded + self.missing.len() + self.dropped.len()
    }
}

/// Result of expanding a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    /// Merged lines in template order.
    pub lines: Vec<String>,
    pub report: ExpansionReport,
}

impl Expansion {
    /// The merged output: lines joined with `\n`, no trailing newline.
    pub fn content(&self) -> String {
        self.lines.join("\n")
    }
}

/// Expands placeholders against a [`SourceProvider`].
pub struct Expander<'a> {
    sources: &'a dyn SourceProvider,
    placeholders: PlaceholderMatcher,
    header: HeaderSkipper,
}

impl<'a> Expander<'a> {
    pub fn new(sources: &'a dyn SourceProvider) -> Result<Self> {
        Ok(Self {
            sources,
            placeholders: PlaceholderMatcher::new()?,
            header: HeaderSkipper::new()?,
        })
    }

    /// Expands every line of `template`.
    ///
    /// # Errors
    /// * `Error::SourceRead` if a referenced source exists but cannot be read
    pub fn expand(&self, template: &str) -> Result<Expansion> {
        let mut lines = Vec::new();
        let mut report = ExpansionReport::default();

        for line in template.lines() {
            match self.placeholders.find(line) {
                Some(placeholder) => {
                    let resolution = self.resolve(&placeholder, &mut lines)?;
                    report.record(&placeholder, &resolution);
                }
                None => {
                    lines.push(trim_line_end(line).to_string());
                    report.passthrough += 1;
                }
            }
        }

        Ok(Expansion { lines, report })
    }

    /// Appends the lines contributed by `placeholder` to `out`.
    pub fn resolve(&self, placeholder: &Placeholder, out: &mut Vec<String>) -> Result<Resolution> {
        let path = &placeholder.source_path;
        if !self.sources.exists(path) {
            debug!("{} does not exist, emitting #error for {}", path, placeholder.component);
            out.push(placeholder.missing_diagnostic());
            return Ok(Resolution::Missing);
        }

        let content = self.sources.read(path)?;
        match self.header.apply(&content) {
            HeaderSkip::Body(body) => {
                debug!("Inlining {} ({} lines)", path, body.len());
                let lines = body.len();
                out.extend(body);
                Ok(Resolution::Expanded { lines })
            }
            HeaderSkip::NoInclude => {
                warn!("{} has no pp/ppCommon include line, nothing was inlined", path);
                Ok(Resolution::NoInclude)
            }
        }
    }
}
