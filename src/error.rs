//! Error handling for ppgen.
//! Defines the error type and result alias used throughout the crate.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a generation run.
///
/// A missing source file is not listed here: it is reported in-band as an
/// `#error` line in the merged output.
#[derive(Error, Debug)]
pub enum Error {
    /// The template is missing or unreadable.
    #[error("Failed to read template '{}': {source}.", .path.display())]
    TemplateRead { path: PathBuf, source: io::Error },

    /// A referenced source file exists but could not be read.
    #[error("Failed to read source file '{}': {source}.", .path.display())]
    SourceRead { path: PathBuf, source: io::Error },

    /// The merged output could not be written.
    #[error("Failed to write output '{}': {source}.", .path.display())]
    OutputWrite { path: PathBuf, source: io::Error },

    /// One of the matching patterns failed to compile.
    #[error("Pattern error: {0}.")]
    PatternError(#[from] regex::Error),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    log::debug!("{:?}", err);
    eprintln!("{}", err);
    std::process::exit(1);
}
