//! xclip-compatible front end for the Windows clipboard helpers
//! `win32yank.exe` and `win32yoink.exe`.

pub mod backend;
pub mod cli;
pub mod error;
pub mod logger;
pub mod model;

pub use cli::dispatch::run;
pub use error::{WrapperError, WrapperResult};
pub use model::{Action, Invocation, Mode, Selection};
