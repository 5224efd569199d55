//! Typed serialization layer for cache backends
//!
//! This crate converts application values to byte payloads for cache storage
//! and reconstructs them on retrieval. The interesting part is the
//! self-describing codec: it remembers, per cache key, which concrete type
//! was encoded under that key, so decode can hand back the original type
//! without the caller re-supplying it.
//!
//! Two codecs are provided behind one [`Codec`] trait:
//! - [`JsonCodec`]: structural JSON payloads plus a per-instance
//!   [`TypeRegistry`] that learns the key → type association on encode.
//! - [`MsgPackCodec`]: stateless MessagePack payloads that carry their own
//!   field names; decode lands in a generic structural value.
//!
//! The codec sits between application and backend: application →
//! `codec.encode` → `backend.set`, then `backend.get` → `codec.decode` →
//! application. It never talks to the backend itself.

pub mod descriptor;
pub mod errors;
pub mod global;
pub mod json;
pub mod msgpack;
pub mod registry;
pub mod traits;

#[cfg(test)]
mod tests_proptest;

pub use descriptor::TypeDescriptor;
pub use errors::{CodecError, Error, RecoveryHint, Result};
pub use global::default_codec;
pub use json::JsonCodec;
pub use msgpack::MsgPackCodec;
pub use registry::{BoxedValue, TypeRegistry};
pub use traits::{CacheValue, Codec};
