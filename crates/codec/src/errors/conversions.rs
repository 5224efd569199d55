//! Constructors that attach key context and default recovery hints

use super::types::{CodecError, RecoveryHint};

impl CodecError {
    pub(crate) fn encode<E>(key: &str, type_name: &'static str, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Encode {
            key: key.to_string(),
            type_name,
            source: Box::new(source),
            recovery_hint: RecoveryHint::Manual {
                instructions: "check that the value's shape is serializable".to_string(),
            },
        }
    }

    pub(crate) fn type_mismatch(
        key: &str,
        registered: &'static str,
        attempted: &'static str,
    ) -> Self {
        Self::TypeMismatch {
            key: key.to_string(),
            registered,
            attempted,
            recovery_hint: RecoveryHint::UseDifferentKey,
        }
    }

    pub(crate) fn unknown_type(key: &str) -> Self {
        Self::UnknownType {
            key: key.to_string(),
            recovery_hint: RecoveryHint::EncodeFirst,
        }
    }

    pub(crate) fn decode<E>(key: &str, type_name: &'static str, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Decode {
            key: key.to_string(),
            type_name,
            source: Box::new(source),
            recovery_hint: RecoveryHint::Discard,
        }
    }
}
