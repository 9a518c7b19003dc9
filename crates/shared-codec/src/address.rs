//! # Account Addresses
//!
//! Variable-length account addresses as reported by signable messages.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An account address.
///
/// Addresses are opaque byte strings at this layer; derivation from public
/// keys and human-readable rendering rules belong to the key infrastructure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccAddress(Vec<u8>);

impl AccAddress {
    /// Create an address from raw bytes.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// The raw address bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns true for the zero-length address.
    ///
    /// Empty addresses are never valid signers; message validation rejects
    /// them before a transaction reaches execution.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Address length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<&[u8]> for AccAddress {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl From<[u8; 20]> for AccAddress {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes.to_vec())
    }
}

impl fmt::Display for AccAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.0))
    }
}
