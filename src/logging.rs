use tracing::Level;

/// Level for the CLI flags; `quiet` wins over `verbose`
pub fn level_for(verbose: bool, quiet: bool) -> Level {
    if quiet {
        Level::ERROR
    } else if verbose {
        Level::DEBUG
    } else {
        Level::WARN
    }
}

/// Install the stderr subscriber. stdout is reserved for converted MML.
pub fn init(verbose: bool, quiet: bool) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level_for(verbose, quiet))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
