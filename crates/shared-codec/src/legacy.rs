//! # Legacy Name Codec
//!
//! The name-based encoding scheme that predates interface-based encoding.
//! Each concrete type must be registered under an explicit, process-unique
//! string name (`<module>/<TypeName>`) before it can be encoded or decoded.
//!
//! ## Lifecycle
//!
//! ```rust,ignore
//! let mut cdc = LegacyCodec::new();
//!
//! // Every module registers during the application-assembly phase.
//! swingset::register_legacy_codec(&mut cdc);
//!
//! // Sealing ends the registration phase. The sealed codec has no
//! // register method, so late registration does not compile.
//! let cdc = cdc.seal();
//! ```
//!
//! The sealed codec is immutable and may be read from any number of threads
//! without synchronization.

use crate::errors::CodecError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::any::TypeId;
use std::collections::HashMap;
use tracing::debug;

/// Wire envelope for the binary legacy encoding.
#[derive(Serialize, Deserialize)]
struct BinaryEnvelope {
    name: String,
    value: Vec<u8>,
}

/// The legacy codec during its mutable registration phase.
///
/// Names are unique keys across the whole application, not per module:
/// every module registers into the same instance, and a collision between
/// two modules is just as fatal as a collision within one.
#[derive(Default)]
pub struct LegacyCodec {
    name_by_type: HashMap<TypeId, String>,
    type_by_name: HashMap<String, TypeId>,
}

impl LegacyCodec {
    /// Create a new empty codec.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a concrete type under a legacy name.
    ///
    /// # Panics
    ///
    /// Panics if `name` is already taken, or if `T` was already registered
    /// under another name. Both are programming errors in the assembly
    /// sequence; silently shadowing a wire-format name is unacceptable, so
    /// the initializing process terminates instead.
    pub fn register_concrete<T>(&mut self, name: &str)
    where
        T: Serialize + DeserializeOwned + 'static,
    {
        let type_id = TypeId::of::<T>();
        if self.type_by_name.contains_key(name) {
            panic!("legacy name already registered: {name}");
        }
        if let Some(existing) = self.name_by_type.get(&type_id) {
            panic!("type already registered under legacy name: {existing}");
        }

        debug!("[LegacyCodec] Registering concrete type under {}", name);
        self.name_by_type.insert(type_id, name.to_string());
        self.type_by_name.insert(name.to_string(), type_id);
    }

    /// Returns true if `name` is taken.
    pub fn is_registered(&self, name: &str) -> bool {
        self.type_by_name.contains_key(name)
    }

    /// End the registration phase.
    ///
    /// Consumes the mutable codec and returns the read-only form used by
    /// every call site from here on. The transition is one-way; there is no
    /// unseal, and the sealed type has no register method:
    ///
    /// ```compile_fail
    /// let cdc = shared_codec::LegacyCodec::new().seal();
    /// cdc.register_concrete::<u64>("late/Entry");
    /// ```
    pub fn seal(self) -> SealedLegacyCodec {
        debug!(
            "[LegacyCodec] Sealed with {} registered names",
            self.type_by_name.len()
        );
        SealedLegacyCodec {
            name_by_type: self.name_by_type,
            type_by_name: self.type_by_name,
        }
    }
}

/// The legacy codec after sealing: read-only, `Send + Sync`, and safe to
/// share across threads with no locking since no field is ever mutated.
pub struct SealedLegacyCodec {
    name_by_type: HashMap<TypeId, String>,
    type_by_name: HashMap<String, TypeId>,
}

impl SealedLegacyCodec {
    /// The legacy name `T` was registered under, if any.
    pub fn name_of<T: 'static>(&self) -> Option<&str> {
        self.name_by_type.get(&TypeId::of::<T>()).map(String::as_str)
    }

    /// Returns true if `name` was registered before sealing.
    pub fn is_registered(&self, name: &str) -> bool {
        self.type_by_name.contains_key(name)
    }

    /// Number of registered names.
    pub fn len(&self) -> usize {
        self.type_by_name.len()
    }

    /// Returns true if nothing was registered before sealing.
    pub fn is_empty(&self) -> bool {
        self.type_by_name.is_empty()
    }

    /// Encode a registered value as the legacy JSON envelope
    /// `{"type": "<name>", "value": {...}}`.
    pub fn encode_json<T>(&self, value: &T) -> Result<Value, CodecError>
    where
        T: Serialize + 'static,
    {
        let name = self.required_name::<T>()?;
        Ok(json!({
            "type": name,
            "value": serde_json::to_value(value)?,
        }))
    }

    /// Decode a legacy JSON envelope into a registered concrete type.
    ///
    /// The envelope's `type` field must name exactly the registration of
    /// `T`; an unknown name and a known-but-different name are distinct
    /// failures.
    pub fn decode_json<T>(&self, envelope: &Value) -> Result<T, CodecError>
    where
        T: DeserializeOwned + 'static,
    {
        let expected = self.required_name::<T>()?;
        let found = envelope
            .get("type")
            .and_then(Value::as_str)
            .ok_or(CodecError::MalformedEnvelope("type"))?;

        if !self.type_by_name.contains_key(found) {
            return Err(CodecError::UnknownLegacyName(found.to_string()));
        }
        if found != expected {
            return Err(CodecError::NameMismatch {
                expected: expected.to_string(),
                found: found.to_string(),
            });
        }

        let value = envelope
            .get("value")
            .ok_or(CodecError::MalformedEnvelope("value"))?;
        Ok(serde_json::from_value(value.clone())?)
    }

    /// Encode a registered value in the binary legacy framing.
    pub fn encode_binary<T>(&self, value: &T) -> Result<Vec<u8>, CodecError>
    where
        T: Serialize + 'static,
    {
        let name = self.required_name::<T>()?;
        let envelope = BinaryEnvelope {
            name: name.to_string(),
            value: bincode::serialize(value)?,
        };
        Ok(bincode::serialize(&envelope)?)
    }

    /// Decode the binary legacy framing into a registered concrete type.
    pub fn decode_binary<T>(&self, bytes: &[u8]) -> Result<T, CodecError>
    where
        T: DeserializeOwned + 'static,
    {
        let expected = self.required_name::<T>()?;
        let envelope: BinaryEnvelope = bincode::deserialize(bytes)?;

        if !self.type_by_name.contains_key(envelope.name.as_str()) {
            return Err(CodecError::UnknownLegacyName(envelope.name));
        }
        if envelope.name != expected {
            return Err(CodecError::NameMismatch {
                expected: expected.to_string(),
                found: envelope.name,
            });
        }
        Ok(bincode::deserialize(&envelope.value)?)
    }

    fn required_name<T: 'static>(&self) -> Result<&str, CodecError> {
        self.name_of::<T>()
            .ok_or(CodecError::UnregisteredType(std::any::type_name::<T>()))
    }
}
