use env_logger::{Builder, Target};
use log::{Level, LevelFilter};
use std::env;
use std::io::Write;

/// Log target for terminal failure reports; only `-quiet` silences it.
pub const REPORT_TARGET: &str = "xclip::report";

/// Effective filter: quiet silences everything, verbose forces debug.
pub fn log_level(quiet: bool, verbose: bool, configured: LevelFilter) -> LevelFilter {
    if quiet {
        LevelFilter::Off
    } else if verbose {
        LevelFilter::Debug
    } else {
        configured
    }
}

/// Install the stderr logger. Standard output is reserved for clipboard data.
pub fn setup_logger(quiet: bool, verbose: bool, configured: LevelFilter) {
    let mut builder = Builder::new();
    builder.filter(None, log_level(quiet, verbose, configured));
    builder.target(Target::Stderr);

    builder.format(|buf, record| {
        let prefix = match record.level() {
            Level::Error => "Error: ",
            Level::Warn => "Warning: ",
            Level::Info => "",
            Level::Debug => "",
            Level::Trace => "",
        };
        writeln!(buf, "xclip: {}{}", prefix, record.args())
    });

    if !quiet && env::var("RUST_LOG").is_ok() {
        builder.parse_default_env();
    }
    if !quiet {
        builder.filter_module(REPORT_TARGET, LevelFilter::Error);
    }

    // A logger may already be installed when embedded; keep the first one.
    let _ = builder.try_init();
}
