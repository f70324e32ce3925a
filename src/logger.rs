/// Logger configuration: warnings only by default, everything with `verbose`.
pub fn logger_builder(verbose: bool) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(if verbose {
        log::LevelFilter::Trace
    } else {
        log::LevelFilter::Warn
    });
    builder
}

pub fn init_logger(verbose: bool) {
    logger_builder(verbose).init();
}
