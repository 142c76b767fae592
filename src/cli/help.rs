//! Fixed informational documents for `-help` and `-version`.

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP: &str = "\
xclip wrapper - xclip-compatible front end for win32yank.exe / win32yoink.exe

Usage:
  xclip [OPTIONS] -i   < input
  xclip [OPTIONS] -o   > output

Options:
  -i, --in              Copy: read standard input into the clipboard
  -o, --out             Paste: write the clipboard to standard output
  -selection <name>     Selection to use: primary (p) or clipboard (c),
                        case-insensitive; also -selection=<name>
                        (default: clipboard)
  -t, -target <name>    Same as -selection
  -quiet                Do not print diagnostics on standard error
  -verbose              Print debug diagnostics on standard error
  -version              Print version information and exit
  -help                 Print this help and exit

Backends:
  win32yank.exe is used when found on PATH, otherwise win32yoink.exe.
  Both keep a single store, so primary and clipboard share content.
  Set XCLIP_WRAPPER_CONFIG or use ~/.config/xclip-wrapper/config.toml
  to change the backend list.

Examples:
  Copy from stdin to clipboard:
    echo \"hello\" | xclip -selection clipboard -i
  Paste from clipboard to stdout:
    xclip -selection clipboard -o
  Copy a file to the primary selection:
    xclip -selection=p -i < notes.txt
";

/// Help document printed for `-help`.
pub fn help_text() -> &'static str {
    HELP
}

/// One-line version banner printed for `-version`.
pub fn version_text() -> String {
    format!("xclip wrapper version {} (backends: win32yank.exe, win32yoink.exe)\n", VERSION)
}
