pub mod locator;
pub mod transfer;

pub use locator::{Backend, BackendLocator};
