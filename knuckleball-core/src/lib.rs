//!
//! This crate contains common types that are shared between the Knuckleball grammar, parser and interpreter.
//!

/// The closed set of errors a statement can produce.
pub mod error;
/// Byte-oriented string helpers (trimming, escaping).
pub mod text;
/// Type tags for runtime values.
pub mod types;

pub use crate::error::Error;
pub use crate::types::{PrimitiveType, TypeTag};
