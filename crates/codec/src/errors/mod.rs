//! Error handling for the codec layer
//!
//! Typed errors with recovery hints. Nothing here retries on its own;
//! retry policy belongs to the caller or the backend.

mod conversions;
mod display;
mod recovery;
mod types;

pub use types::*;
