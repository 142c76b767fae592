pub mod config;
pub mod invocation;

pub use config::{Config, ConfigError};
pub use invocation::{Action, Invocation, Mode, Selection};
