use std::ffi::OsString;

use clap::Parser;

use crate::error::ParseError;
use crate::model::{Action, Invocation, Mode, Selection};

/// xclip spellings and the canonical long flag each one stands for.
const FLAG_ALIASES: &[(&str, &str)] = &[
    ("-i", "--in"),
    ("--in", "--in"),
    ("-o", "--out"),
    ("--out", "--out"),
    ("-selection", "--selection"),
    ("-t", "--selection"),
    ("-target", "--selection"),
    ("-quiet", "--quiet"),
    ("-verbose", "--verbose"),
    ("-version", "--version"),
    ("-help", "--help"),
];

/// Canonical argument set, parsed after alias normalization.
#[derive(Parser, Debug)]
#[command(
    name = "xclip",
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true
)]
pub struct Cli {
    /// Read standard input into the clipboard
    #[arg(long = "in")]
    pub copy: bool,

    /// Print the clipboard to standard output
    #[arg(long = "out")]
    pub paste: bool,

    /// Selection name, resolved case-insensitively later
    #[arg(long)]
    pub selection: Option<String>,

    #[arg(long)]
    pub quiet: bool,

    #[arg(long)]
    pub verbose: bool,

    #[arg(long)]
    pub version: bool,

    #[arg(long)]
    pub help: bool,
}

/// Look up an xclip token in the alias table.
pub fn canonical_flag(token: &str) -> Option<&'static str> {
    FLAG_ALIASES
        .iter()
        .find(|(alias, _)| *alias == token)
        .map(|(_, canonical)| *canonical)
}

/// Rewrite xclip-style tokens into canonical long flags.
///
/// `-name=value` keeps its value; anything dash-prefixed that is not in the
/// alias table is rejected. Bare tokens (option values) pass through.
pub fn normalize(args: &[String]) -> Result<Vec<String>, ParseError> {
    args.iter()
        .map(|token| {
            if !token.starts_with('-') || token == "-" {
                return Ok(token.clone());
            }
            let (name, value) = match token.split_once('=') {
                Some((name, value)) => (name, Some(value)),
                None => (token.as_str(), None),
            };
            let canonical =
                canonical_flag(name).ok_or_else(|| ParseError::UnknownFlag(token.clone()))?;
            Ok(match value {
                Some(value) => format!("{}={}", canonical, value),
                None => canonical.to_string(),
            })
        })
        .collect()
}

/// True if the raw arguments ask for quiet output. Used before parsing so
/// that parse failures honour `-quiet` too.
pub fn wants_quiet<S: AsRef<std::ffi::OsStr>>(args: &[S]) -> bool {
    mentions_flag(args, "--quiet")
}

/// True if the raw arguments ask for debug output.
pub fn wants_verbose<S: AsRef<std::ffi::OsStr>>(args: &[S]) -> bool {
    mentions_flag(args, "--verbose")
}

/// Matches only spellings the alias table accepts for `canonical`.
fn mentions_flag<S: AsRef<std::ffi::OsStr>>(args: &[S], canonical: &str) -> bool {
    args.iter()
        .filter_map(|arg| arg.as_ref().to_str())
        .any(|arg| canonical_flag(arg) == Some(canonical))
}

impl Invocation {
    /// Parse the arguments that follow the program name.
    pub fn parse<I>(args: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = OsString>,
    {
        let args = args
            .into_iter()
            .map(|arg| {
                arg.into_string()
                    .map_err(|raw| ParseError::NonUtf8(raw.to_string_lossy().into_owned()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let canonical = normalize(&args)?;
        let cli = Cli::try_parse_from(std::iter::once("xclip".to_string()).chain(canonical))
            .map_err(malformed)?;

        Self::from_cli(cli)
    }

    /// Apply the validation rules to an already-parsed [`Cli`].
    pub fn from_cli(cli: Cli) -> Result<Self, ParseError> {
        let quiet = cli.quiet;
        let verbose = cli.verbose && !cli.quiet;

        if cli.help || cli.version {
            let action = if cli.help { Action::Help } else { Action::Version };
            return Ok(Invocation {
                action,
                selection: Selection::default(),
                quiet,
                verbose,
            });
        }

        let selection = match cli.selection {
            Some(name) => Selection::from_name(&name).ok_or(ParseError::InvalidSelection(name))?,
            None => Selection::default(),
        };

        let mode = match (cli.copy, cli.paste) {
            (true, true) => return Err(ParseError::ConflictingModes),
            (true, false) => Mode::Copy,
            (false, true) => Mode::Paste,
            (false, false) => return Err(ParseError::MissingMode),
        };

        Ok(Invocation {
            action: Action::Transfer(mode),
            selection,
            quiet,
            verbose,
        })
    }
}

/// Condense a clap failure to its first line, without clap's own prefix.
fn malformed(err: clap::Error) -> ParseError {
    let rendered = err.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    ParseError::Malformed(first.trim_start_matches("error: ").to_string())
}
