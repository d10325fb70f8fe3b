//! Logging setup and error reporting shared by the command line tools

use log::error;

/// Log to stderr from the tools and library crates
///
/// Warnings and above are always shown unless `quiet`, with each `-v` adding
/// a level.
pub fn init_logging(verbose: u8, quiet: bool) {
    let result = stderrlog::new()
        .modules([env!("CARGO_CRATE_NAME"), "nrates_nuclide", "nrates_reaction"])
        .quiet(quiet)
        .verbosity(usize::from(verbose) + 2)
        .show_level(true)
        .init();

    if let Err(err) = result {
        eprintln!("failed to initialise logging: {err}");
    }
}

/// Log an error followed by each of its causes
pub fn report(err: &dyn std::error::Error) {
    error!("{err}");
    let mut source = err.source();
    while let Some(cause) = source {
        error!("  caused by: {cause}");
        source = cause.source();
    }
}
