use std::fmt;

/// Direction of the clipboard transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Standard input to clipboard (`-i`).
    Copy,
    /// Clipboard to standard output (`-o`).
    Paste,
}

impl Mode {
    /// The argument every supported backend takes for this direction.
    pub fn backend_flag(self) -> &'static str {
        match self {
            Mode::Copy => "-i",
            Mode::Paste => "-o",
        }
    }
}

/// X11 selection requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    Primary,
    #[default]
    Clipboard,
}

/// Accepted selection spellings, matched case-insensitively.
const SELECTION_NAMES: &[(&str, Selection)] = &[
    ("primary", Selection::Primary),
    ("p", Selection::Primary),
    ("clipboard", Selection::Clipboard),
    ("c", Selection::Clipboard),
];

impl Selection {
    pub fn from_name(name: &str) -> Option<Self> {
        SELECTION_NAMES
            .iter()
            .find(|(alias, _)| alias.eq_ignore_ascii_case(name))
            .map(|(_, selection)| *selection)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Primary => write!(f, "primary"),
            Selection::Clipboard => write!(f, "clipboard"),
        }
    }
}

/// What a run does once its arguments are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Help,
    Version,
    Transfer(Mode),
}

/// One validated command-line run. Built by [`Invocation::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub action: Action,
    pub selection: Selection,
    pub quiet: bool,
    pub verbose: bool,
}
