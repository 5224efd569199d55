//! Process-wide default codec

use crate::json::JsonCodec;
use std::sync::{Arc, OnceLock};
use tracing::debug;

/// Default codec instance, constructed on first use
static DEFAULT_CODEC: OnceLock<Arc<JsonCodec>> = OnceLock::new();

/// Get the process-wide default [`JsonCodec`].
///
/// Lazily constructed once and reused for the rest of the process; its
/// registry grows with distinct cache keys and is never torn down. Callers
/// that want isolated key → type associations construct their own
/// [`JsonCodec`] and pass it along instead of calling this.
pub fn default_codec() -> Arc<JsonCodec> {
    DEFAULT_CODEC
        .get_or_init(|| {
            debug!("initializing default cache codec");
            Arc::new(JsonCodec::new())
        })
        .clone()
}
