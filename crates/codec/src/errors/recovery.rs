//! Recovery utilities for codec errors

use super::types::{CodecError, RecoveryHint};

impl CodecError {
    /// Get the recovery hint for this error
    #[must_use]
    pub const fn recovery_hint(&self) -> &RecoveryHint {
        match self {
            Self::Encode { recovery_hint, .. }
            | Self::TypeMismatch { recovery_hint, .. }
            | Self::UnknownType { recovery_hint, .. }
            | Self::Decode { recovery_hint, .. } => recovery_hint,
        }
    }

    /// The cache key the failing operation was invoked with
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::Encode { key, .. }
            | Self::TypeMismatch { key, .. }
            | Self::UnknownType { key, .. }
            | Self::Decode { key, .. } => key,
        }
    }

    /// Check if this error stems from the key → type association rather
    /// than the payload itself
    #[must_use]
    pub const fn is_type_error(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. } | Self::UnknownType { .. })
    }
}
