//! Logging.

mod macros;

pub use log::*;
