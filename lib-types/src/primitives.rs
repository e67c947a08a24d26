//! Canonical primitive types for protocol state
//!
//! These types are the foundational building blocks for every record the
//! engines mutate. They are designed to be:
//! - Fixed-size (no dynamic allocation)
//! - Deterministically serializable
//! - Efficient to copy and compare

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// Fungible token and native-currency quantities
pub type Amount = u64;

/// Backing integer for the path flag bitmask (16 usable bits)
pub type FlagBits = u16;

// ============================================================================
// ACCOUNT KEYS
// ============================================================================

/// 32-byte reference to a ledger account (record, mint, collection, asset,
/// wallet). The derivation of these keys is owned by the surrounding ledger;
/// the core only compares and stores them.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize, Default)]
pub struct AccountKey(pub [u8; 32]);

impl AccountKey {
    /// Create a new AccountKey from raw bytes
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Create a zeroed AccountKey
    pub const fn zero() -> Self {
        Self([0u8; 32])
    }

    /// Get the underlying bytes
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Check if this is the zero key
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Debug for AccountKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountKey({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for AccountKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl From<[u8; 32]> for AccountKey {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for AccountKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_construction() {
        let key = AccountKey::new([7u8; 32]);
        assert_eq!(key.as_bytes(), &[7u8; 32]);
        assert!(!key.is_zero());
        assert!(AccountKey::zero().is_zero());
    }

    #[test]
    fn test_key_display_is_full_hex() {
        let key = AccountKey::new([0xabu8; 32]);
        assert_eq!(key.to_string(), "ab".repeat(32));
    }

    #[test]
    fn test_key_serde_round_trip() {
        let key = AccountKey::new([3u8; 32]);
        let json = serde_json::to_string(&key).unwrap();
        let back: AccountKey = serde_json::from_str(&json).unwrap();
        assert_eq!(key, back);
    }
}
