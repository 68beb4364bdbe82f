//! # Holder Address
//!
//! The public identifier bound into every registration and every
//! predicate proof. Binding the address prevents a proof produced for one
//! holder from being replayed as if produced by another.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CoreError;
use crate::hexfmt;

/// Length of a holder address in bytes.
pub const ADDRESS_LEN: usize = 32;

/// A 32-byte public holder identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HolderAddress([u8; ADDRESS_LEN]);

impl HolderAddress {
    /// Construct an address from raw bytes.
    pub fn from_bytes(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    /// Construct an address from a byte slice, rejecting any length other
    /// than 32 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CoreError> {
        if bytes.len() != ADDRESS_LEN {
            return Err(CoreError::InvalidAddressLength(bytes.len()));
        }
        let mut out = [0u8; ADDRESS_LEN];
        out.copy_from_slice(bytes);
        Ok(Self(out))
    }

    /// The raw address bytes.
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    /// The interchange form: `0x` + 64 lowercase hex characters.
    pub fn to_hex(&self) -> String {
        hexfmt::encode_prefixed(&self.0)
    }

    /// Parse the strict interchange form.
    pub fn parse_hex(s: &str) -> Result<Self, CoreError> {
        hexfmt::decode_prefixed(s).map(Self)
    }
}

impl std::fmt::Display for HolderAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for HolderAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for HolderAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        HolderAddress::parse_hex(&s).map_err(serde::de::Error::custom)
    }
}
