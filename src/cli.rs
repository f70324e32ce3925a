//! Command-line interface implementation for ppgen.
//! Provides argument parsing using clap. Every option has a default, so a
//! bare `ppgen` run uses the conventional paths.

use clap::Parser;
use std::path::PathBuf;

use crate::constants::{DEFAULT_OUTPUT, DEFAULT_ROOT, DEFAULT_TEMPLATE};

/// Command-line arguments structure for ppgen.
#[derive(Parser, Debug)]
#[command(author, version, about = "ppgen: merge pp sources into a single file", long_about = None)]
pub struct Args {
    /// Template containing {{src/pp<NAME>.c}} placeholders
    #[arg(short, long, value_name = "TEMPLATE", default_value = DEFAULT_TEMPLATE)]
    pub template: PathBuf,

    /// File the merged output is written to
    #[arg(short, long, value_name = "OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Directory placeholder paths are resolved against
    #[arg(short = 'C', long, value_name = "DIR", default_value = DEFAULT_ROOT)]
    pub root: PathBuf,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments, exiting through clap on usage errors.
pub fn get_args() -> Args {
    Args::parse()
}
