//! Self-describing JSON codec
//!
//! Payloads are plain structural JSON and carry no type metadata of their
//! own; the codec compensates by learning, per cache key, which concrete
//! type was encoded under that key. Decode then reconstructs that exact
//! type and hands ownership of a fresh instance back to the caller.

use crate::descriptor::TypeDescriptor;
use crate::errors::{CodecError, Result};
use crate::registry::{BoxedValue, TypeRegistry};
use crate::traits::{CacheValue, Codec};
use std::any::type_name;
use tracing::trace;

/// Monomorphized per `T`; stored in the registry as the decode-side factory.
fn decode_into<T: CacheValue>(payload: &[u8]) -> serde_json::Result<BoxedValue> {
    serde_json::from_slice::<T>(payload).map(|value| Box::new(value) as BoxedValue)
}

/// Stateful codec with a self-learning type registry.
///
/// Instances are independent: a registry is never shared or persisted, so
/// bytes encoded by one instance decode on another only after that instance
/// has learned the same key → type association through its own encode.
#[derive(Debug, Default)]
pub struct JsonCodec {
    registry: TypeRegistry,
}

impl JsonCodec {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The key → type associations learned so far
    #[must_use]
    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// Decode and downcast to `T` in one step.
    ///
    /// Fails with `TypeMismatch` when `T` is not the type registered for
    /// `key`, before touching the payload.
    pub fn decode_as<T: CacheValue>(&self, key: &str, payload: &[u8]) -> Result<T> {
        let registration = self
            .registry
            .lookup(key)
            .ok_or_else(|| CodecError::unknown_type(key))?;
        if !registration.descriptor.is::<T>() {
            return Err(CodecError::type_mismatch(
                key,
                registration.descriptor.name(),
                type_name::<T>(),
            ));
        }
        serde_json::from_slice(payload).map_err(|e| CodecError::decode(key, type_name::<T>(), e))
    }
}

impl Codec for JsonCodec {
    type Decoded = BoxedValue;

    fn encode<T: CacheValue>(&self, key: &str, value: &T) -> Result<Vec<u8>> {
        let payload =
            serde_json::to_vec(value).map_err(|e| CodecError::encode(key, type_name::<T>(), e))?;

        // Registration only happens once the payload exists; a mismatch
        // discards the payload and leaves the registry as it was.
        self.registry
            .bind(key, TypeDescriptor::of::<T>(), decode_into::<T>)?;

        Ok(payload)
    }

    fn decode(&self, key: &str, payload: &[u8]) -> Result<BoxedValue> {
        let registration = self
            .registry
            .lookup(key)
            .ok_or_else(|| CodecError::unknown_type(key))?;
        trace!(key, r#type = registration.descriptor.name(), "decoding cache payload");
        (registration.decode)(payload)
            .map_err(|e| CodecError::decode(key, registration.descriptor.name(), e))
    }
}
