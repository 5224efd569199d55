//! Display implementations for codec errors

use super::types::CodecError;
use std::fmt;

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encode {
                key,
                type_name,
                source,
                ..
            } => write!(
                f,
                "failed to encode '{key}' as {type_name}: {source}"
            ),
            Self::TypeMismatch {
                key,
                registered,
                attempted,
                ..
            } => write!(
                f,
                "type mismatch for key '{key}': registered as {registered}, attempted {attempted}"
            ),
            Self::UnknownType { key, .. } => {
                write!(f, "no type registered for key '{key}': decode requires a prior encode")
            }
            Self::Decode {
                key,
                type_name,
                source,
                ..
            } => write!(
                f,
                "failed to decode '{key}' as {type_name}: {source}"
            ),
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Encode { source, .. } | Self::Decode { source, .. } => Some(&**source),
            Self::TypeMismatch { .. } | Self::UnknownType { .. } => None,
        }
    }
}
