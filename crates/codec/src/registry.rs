//! Self-learning key → type registry
//!
//! Owned exclusively by one [`JsonCodec`](crate::json::JsonCodec) instance.
//! An entry is created on the first successful encode for a key and lives as
//! long as the codec; the codec never removes entries. Alongside the
//! descriptor each entry stores a monomorphized decode function, so the
//! decode path can allocate a fresh instance of the remembered type without
//! any runtime reflection.

use crate::descriptor::TypeDescriptor;
use crate::errors::{CodecError, Result};
use parking_lot::RwLock;
use std::any::Any;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Ownership handle for a decoded value of the remembered concrete type
pub type BoxedValue = Box<dyn Any + Send + Sync>;

/// Decode function captured at first encode for a key
pub(crate) type DecodeFn = fn(&[u8]) -> serde_json::Result<BoxedValue>;

#[derive(Clone, Copy)]
pub(crate) struct Registration {
    pub(crate) descriptor: TypeDescriptor,
    pub(crate) decode: DecodeFn,
}

/// Mapping from cache key to the type last encoded under it
#[derive(Default)]
pub struct TypeRegistry {
    entries: RwLock<HashMap<String, Registration>>,
}

impl TypeRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `key` to `descriptor`, or verify an existing binding.
    ///
    /// At most one descriptor is ever associated with a key: a second,
    /// different descriptor fails with `TypeMismatch` and leaves the
    /// registry untouched. Re-binding the same descriptor is a no-op.
    /// Runs under the write lock for the duration of a map lookup/insert.
    pub(crate) fn bind(
        &self,
        key: &str,
        descriptor: TypeDescriptor,
        decode: DecodeFn,
    ) -> Result<()> {
        let mut entries = self.entries.write();
        match entries.get(key) {
            Some(existing) if existing.descriptor != descriptor => {
                warn!(
                    key,
                    registered = existing.descriptor.name(),
                    attempted = descriptor.name(),
                    "refusing to rebind cache key to a different type"
                );
                Err(CodecError::type_mismatch(
                    key,
                    existing.descriptor.name(),
                    descriptor.name(),
                ))
            }
            Some(_) => Ok(()),
            None => {
                debug!(key, r#type = descriptor.name(), "registered cache key type");
                entries.insert(key.to_string(), Registration { descriptor, decode });
                Ok(())
            }
        }
    }

    /// Look up the registration for `key` under the read lock
    pub(crate) fn lookup(&self, key: &str) -> Option<Registration> {
        self.entries.read().get(key).copied()
    }

    /// Descriptor currently bound to `key`, if any
    #[must_use]
    pub fn descriptor_for(&self, key: &str) -> Option<TypeDescriptor> {
        self.entries.read().get(key).map(|r| r.descriptor)
    }

    /// Number of keys with a learned type
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl std::fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("keys", &self.len())
            .finish()
    }
}
