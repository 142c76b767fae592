use std::ffi::OsString;
use std::io::{self, Write};

use log::{LevelFilter, debug, error, info};

use crate::backend::{BackendLocator, transfer};
use crate::cli::args::{wants_quiet, wants_verbose};
use crate::cli::help::{help_text, version_text};
use crate::error::{WrapperError, WrapperResult, exitcode};
use crate::logger::{REPORT_TARGET, setup_logger};
use crate::model::{Action, Config, Invocation, Mode, Selection};

/// Parse `args` (without the program name), act on them, and return the
/// process exit code.
pub fn run<I>(args: I) -> i32
where
    I: IntoIterator<Item = OsString>,
{
    let args: Vec<OsString> = args.into_iter().collect();
    let quiet = wants_quiet(&args);
    let verbose = wants_verbose(&args);

    match Invocation::parse(args) {
        Ok(invocation) => handle(invocation),
        Err(e) => {
            setup_logger(quiet, verbose, LevelFilter::Warn);
            report(e.into())
        }
    }
}

pub fn handle(invocation: Invocation) -> i32 {
    match invocation.action {
        Action::Help => emit(help_text()),
        Action::Version => emit(&version_text()),
        Action::Transfer(mode) => {
            let config = match Config::load() {
                Ok(config) => config,
                Err(e) => {
                    setup_logger(invocation.quiet, invocation.verbose, LevelFilter::Warn);
                    return report(e.into());
                }
            };
            let level = config.level_filter().unwrap_or(LevelFilter::Warn);
            setup_logger(invocation.quiet, invocation.verbose, level);
            debug!("Loaded configuration: {:?}", config);

            match run_transfer(mode, invocation.selection, &config) {
                Ok(bytes) => {
                    debug!("{:?} finished, {} bytes", mode, bytes);
                    exitcode::OK
                }
                Err(e) => report(e),
            }
        }
    }
}

fn run_transfer(mode: Mode, selection: Selection, config: &Config) -> WrapperResult<usize> {
    let backend = BackendLocator::from_config(&config.backend).locate()?;
    info!("Running {:?} ({}) via {}", mode, selection, backend.name);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let bytes = transfer::run(mode, selection, &backend, &mut stdin.lock(), &mut stdout.lock())?;
    Ok(bytes)
}

fn emit(text: &str) -> i32 {
    let mut stdout = io::stdout().lock();
    match stdout.write_all(text.as_bytes()).and_then(|_| stdout.flush()) {
        Ok(()) => exitcode::OK,
        Err(_) => exitcode::IOERR,
    }
}

fn report(e: WrapperError) -> i32 {
    error!(target: REPORT_TARGET, "{}", e);
    e.exit_code()
}
