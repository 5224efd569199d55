//! Core error types for the codec layer

/// Result type for codec operations
pub type Result<T> = std::result::Result<T, CodecError>;

/// Re-export `CodecError` as `Error` for callers that alias it
pub use self::CodecError as Error;

/// Error type for encode/decode operations
#[derive(Debug)]
pub enum CodecError {
    /// Value could not be serialized to a byte payload
    Encode {
        key: String,
        type_name: &'static str,
        source: Box<dyn std::error::Error + Send + Sync>,
        recovery_hint: RecoveryHint,
    },

    /// Key is already bound to a different concrete type
    TypeMismatch {
        key: String,
        registered: &'static str,
        attempted: &'static str,
        recovery_hint: RecoveryHint,
    },

    /// Decode requested for a key with no prior successful encode
    UnknownType {
        key: String,
        recovery_hint: RecoveryHint,
    },

    /// Payload is malformed or inconsistent with the registered type
    Decode {
        key: String,
        type_name: &'static str,
        source: Box<dyn std::error::Error + Send + Sync>,
        recovery_hint: RecoveryHint,
    },
}

/// Recovery hints for error handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecoveryHint {
    /// Encode under a different cache key
    UseDifferentKey,

    /// Perform a successful encode for this key first
    EncodeFirst,

    /// Drop the cached payload; it cannot be recovered
    Discard,

    /// Manual intervention with the given instructions
    Manual { instructions: String },
}
