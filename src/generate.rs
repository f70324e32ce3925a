//! File-level wrapper around the expander: read the template, expand it,
//! write the merged output in one go.

use log::debug;
use std::fs;
use std::path::Path;

use crate::{
    error::{Error, Result},
    expander::{Expander, ExpansionReport},
    source::SourceProvider,
};

/// Reads the template file.
///
/// # Errors
/// * `Error::TemplateRead` if the template is missing or unreadable
pub fn read_template<P: AsRef<Path>>(template_path: P) -> Result<String> {
    let path = template_path.as_ref();
    fs::read_to_string(path)
        .map_err(|source| Error::TemplateRead { path: path.to_path_buf(), source })
}

/// Replaces the content of `output_path` with `content`, creating parent
/// directories when needed.
pub fn write_output<P: AsRef<Path>>(output_path: P, content: &str) -> Result<()> {
    let path = output_path.as_ref();
    let to_error = |source| Error::OutputWrite { path: path.to_path_buf(), source };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(to_error)?;
    }
    fs::write(path, content).map_err(to_error)
}

/// Expands `template_path` against `sources` and writes the result to
/// `output_path`.
///
/// # Flow
/// 1. Reads the template (fatal on failure, nothing is written)
/// 2. Expands all placeholders in memory
/// 3. Writes the merged output, overwriting any previous content
pub fn generate<P, Q>(
    template_path: P,
    output_path: Q,
    sources: &dyn SourceProvider,
) -> Result<ExpansionReport>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let template = read_template(&template_path)?;
    debug!("Read template {}", template_path.as_ref().display());

    let expansion = Expander::new(sources)?.expand(&template)?;

    write_output(&output_path, &expansion.content())?;
    debug!(
        "Wrote {} lines to {}",
        expansion.lines.len(),
        output_path.as_ref().display()
    );

    Ok(expansion.report)
}
