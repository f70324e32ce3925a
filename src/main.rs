//! ppgen's entry point: parses arguments, sets up logging and runs a single
//! generation pass.

use ppgen::{
    cli::{get_args, Args},
    error::{default_error_handler, Result},
    generate::generate,
    logger::init_logger,
    source::FileSystemSource,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn run(args: Args) -> Result<()> {
    let sources = FileSystemSource::new(&args.root);
    let report = generate(&args.template, &args.output, &sources)?;

    println!(
        "Generated '{}': {} expanded, {} missing, {} without include line.",
        args.output.display(),
        report.expanded,
        report.missing.len(),
        report.dropped.len()
    );
    Ok(())
}
