//! ppgen merges the pp platform sources into one compilation unit.
//! It expands `{{src/pp<NAME>.c}}` placeholders in a template into the
//! bodies of the referenced source files and writes a single merged file.

/// Command-line interface module
pub mod cli;

/// Conventional paths and matching patterns
pub mod constants;

/// Error types and handling
pub mod error;

/// Template expansion pass
pub mod expander;

/// Reading the template and writing the merged output
pub mod generate;

/// Dropping each source file's standalone include header
pub mod header;

/// Logger initialisation
pub mod logger;

/// Placeholder recognition
pub mod placeholder;

/// Source file lookup
pub mod source;

/// Line trimming helpers
pub mod text;
