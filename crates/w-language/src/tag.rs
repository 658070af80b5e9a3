//! Identity tags for opaque values crossing into native code

use serde::{Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::fmt;

/// A 128-bit type tag, layout-compatible with the two-word tags dynamic
/// host runtimes attach to external values.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeTag {
    pub lower: u64,
    pub upper: u64,
}

/// "tree-sitter", "language" hashed with BLAKE2.
///
/// Shared by every tree-sitter grammar binding; consumers hardcode it, so it
/// must never change.
pub const LANGUAGE_TYPE_TAG: TypeTag = TypeTag::new(0x8AF2E5212AD58ABF, 0xD5006CAD83ABBA16);

impl TypeTag {
    pub const fn new(lower: u64, upper: u64) -> Self {
        Self { lower, upper }
    }

    /// Derive a tag for some other opaque kind from a namespaced name such as
    /// `"tree-sitter:parser"`.
    ///
    /// Uses the first 128 bits of SHA-256. [`LANGUAGE_TYPE_TAG`] is pinned and
    /// is not produced by this function.
    pub fn from_name(name: &str) -> Self {
        let digest = Sha256::digest(name.as_bytes());
        let mut lower = [0u8; 8];
        let mut upper = [0u8; 8];
        lower.copy_from_slice(&digest[..8]);
        upper.copy_from_slice(&digest[8..16]);
        Self::new(u64::from_be_bytes(lower), u64::from_be_bytes(upper))
    }

    /// Byte representation in host memory order
    pub fn to_ne_bytes(self) -> [u8; 16] {
        let mut bytes = [0u8; 16];
        bytes[..8].copy_from_slice(&self.lower.to_ne_bytes());
        bytes[8..].copy_from_slice(&self.upper.to_ne_bytes());
        bytes
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016X}{:016X}", self.lower, self.upper)
    }
}

impl Serialize for TypeTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
