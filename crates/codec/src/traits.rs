//! The codec capability contract

use crate::errors::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::any::Any;

/// Values a codec can carry through a cache backend.
///
/// Blanket-implemented; callers never implement this by hand. The `Any`
/// bound is what lets the self-describing codec hand back the original
/// concrete type at decode time.
pub trait CacheValue: Serialize + DeserializeOwned + Any + Send + Sync {}

impl<T> CacheValue for T where T: Serialize + DeserializeOwned + Any + Send + Sync {}

/// How cached data is encoded and decoded on its way to and from the
/// backend storage.
///
/// `encode` is invoked on the write path with the cache key and the value;
/// `decode` is invoked on the read path with the same key and the raw bytes
/// the backend returned. A stateful implementation may record type
/// information keyed by `key` during encode.
pub trait Codec {
    /// What decode hands back: a boxed value of the remembered concrete
    /// type for the self-describing codec, a generic structural value for
    /// the stateless one.
    type Decoded;

    /// Convert `value` to a byte payload suitable for storage.
    fn encode<T: CacheValue>(&self, key: &str, value: &T) -> Result<Vec<u8>>;

    /// Reconstruct a value from a payload previously produced by `encode`
    /// under the same key. Fails with a descriptive error when the type
    /// cannot be determined or the payload cannot be parsed; never returns
    /// a zero value.
    fn decode(&self, key: &str, payload: &[u8]) -> Result<Self::Decoded>;
}
