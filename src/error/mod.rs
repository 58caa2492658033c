//! Error handling for reqgen
//!
//! Error types, the result alias, and context helpers.

pub mod context;
pub mod types;

pub use context::{handle_error, ResultExt};
pub use types::{ErrorSeverity, ReqgenError, Result};
