//!
//! This is the interpreter for the Knuckleball statement language.
//!

/// Facilities for ordering values, with a tolerance for floats.
pub mod compare;
/// The variable registry and the statement entry point.
pub mod context;
/// The statement log.
pub mod logger;
/// Definitions for all supported primitives.
pub mod primitives;
/// The TCP front-end.
pub mod server;
/// Facilities for handling `Connection` messages.
pub mod session;
/// Facilities for manipulating values.
pub mod value;

pub use crate::context::{Context, Settings};
pub use crate::value::Value;
