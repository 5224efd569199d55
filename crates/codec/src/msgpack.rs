//! Stateless MessagePack codec
//!
//! Encodes with field names included (`rmp_serde::to_vec_named`), so the
//! payload carries its own schema and no per-key memory is needed. The
//! trade-off sits on the decode side: with no registry there is no concrete
//! type to target, so decode returns a generic structural
//! [`serde_json::Value`]. That is a documented limitation of this variant,
//! not a defect: callers needing a concrete type convert the value
//! themselves.

use crate::errors::{CodecError, Result};
use crate::traits::{CacheValue, Codec};
use std::any::type_name;

/// Stateless fallback codec; no registry, no type recovery.
#[derive(Debug, Clone, Copy, Default)]
pub struct MsgPackCodec;

impl MsgPackCodec {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Codec for MsgPackCodec {
    type Decoded = serde_json::Value;

    fn encode<T: CacheValue>(&self, key: &str, value: &T) -> Result<Vec<u8>> {
        rmp_serde::to_vec_named(value).map_err(|e| CodecError::encode(key, type_name::<T>(), e))
    }

    fn decode(&self, key: &str, payload: &[u8]) -> Result<serde_json::Value> {
        rmp_serde::from_slice(payload)
            .map_err(|e| CodecError::decode(key, type_name::<serde_json::Value>(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Account {
        id: u64,
        name: String,
        tags: Vec<String>,
    }

    #[test]
    fn round_trip_through_generic_value() {
        let codec = MsgPackCodec::new();
        let original = Account {
            id: 7,
            name: "alice".to_string(),
            tags: vec!["admin".to_string()],
        };

        let payload = codec.encode("acct:7", &original).unwrap();
        let decoded = codec.decode("acct:7", &payload).unwrap();

        assert_eq!(
            decoded,
            json!({"id": 7, "name": "alice", "tags": ["admin"]})
        );

        // The caller-side conversion the stateless contract requires.
        let restored: Account = serde_json::from_value(decoded).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn decode_needs_no_prior_encode() {
        let codec = MsgPackCodec::new();
        let payload = codec.encode("somewhere-else", &42u32).unwrap();
        let decoded = codec.decode("never-seen", &payload).unwrap();
        assert_eq!(decoded, json!(42));
    }

    #[derive(Debug)]
    struct Opaque;

    impl Serialize for Opaque {
        fn serialize<S>(&self, _serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            use serde::ser::Error;
            Err(S::Error::custom("unsupported value shape"))
        }
    }

    impl<'de> Deserialize<'de> for Opaque {
        fn deserialize<D>(_deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            Ok(Self)
        }
    }

    #[test]
    fn unserializable_value_fails_with_encode_error() {
        let codec = MsgPackCodec::new();
        let err = codec.encode("k", &Opaque).unwrap_err();
        assert!(matches!(err, CodecError::Encode { .. }));
    }

    #[test]
    fn malformed_payload_fails_with_decode_error() {
        let codec = MsgPackCodec::new();
        let err = codec.decode("k", &[0xc1]).unwrap_err();
        assert!(matches!(err, CodecError::Decode { .. }));
    }
}
