//! Escrow Records

use serde::{Deserialize, Serialize};

use lib_types::{AccountKey, Amount};

use crate::path::{PathFeature, PathFlags};

/// Collection-scoped escrow: custody identity, swap economics and the swap
/// counter for one collection/mint pairing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscrowV1 {
    /// The collection this escrow swaps against
    pub collection: AccountKey,
    /// The escrow authority (must match the collection authority)
    pub authority: AccountKey,
    /// The fungible mint dispensed and collected by swaps
    pub token: AccountKey,
    /// Destination for mint-denominated and native project fees
    pub fee_location: AccountKey,
    /// The asset display name written on reroll
    pub name: String,
    /// The base URI for asset metadata
    pub uri: String,
    /// Upper bound of the metadata index range
    pub max: Amount,
    /// Lower bound of the metadata index range
    pub min: Amount,
    /// Token cost of one swap
    pub amount: Amount,
    /// Mint-denominated fee per swap
    pub fee_amount: Amount,
    /// Native-currency project fee per swap
    pub sol_fee_amount: Amount,
    /// Swap counter, seeded at 1 ("no swap yet performed")
    pub count: u64,
    /// Behavioral flags
    pub path: PathFlags,
    /// Storage derivation bump seed
    pub bump: u8,
}

impl EscrowV1 {
    /// Fixed part of the storage footprint: discriminator, four keys, two
    /// string length prefixes, five amounts, counter, flags, bump.
    pub const BASE_SIZE: usize = 8 + 32 * 4 + 4 + 4 + 8 * 5 + 8 + 2 + 1;

    /// Whether at least one swap has been performed
    pub fn has_swapped(&self) -> bool {
        self.count > 1
    }

    /// Exact storage footprint: base plus string payloads, plus the
    /// reserved per-asset counter word under `RerollMetadataV2`.
    pub fn storage_size(&self) -> usize {
        let mut size = Self::BASE_SIZE + self.name.len() + self.uri.len();
        if self.path.test(PathFeature::RerollMetadataV2) {
            size += 2;
        }
        size
    }
}

/// Authority-scoped escrow: shared custody referenced by one or more
/// [`crate::RecipeV1`] records. Carries no economics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscrowV2 {
    /// The escrow authority
    pub authority: AccountKey,
    /// Storage derivation bump seed
    pub bump: u8,
}

impl EscrowV2 {
    pub const BASE_SIZE: usize = 8 + 32 + 1;

    pub fn new(authority: AccountKey, bump: u8) -> Self {
        Self { authority, bump }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escrow() -> EscrowV1 {
        EscrowV1 {
            collection: AccountKey::new([1; 32]),
            authority: AccountKey::new([2; 32]),
            token: AccountKey::new([3; 32]),
            fee_location: AccountKey::new([4; 32]),
            name: "Droid".to_string(),
            uri: "https://example.com/".to_string(),
            max: 100,
            min: 1,
            amount: 5,
            fee_amount: 1,
            sol_fee_amount: 0,
            count: 1,
            path: PathFlags::empty(),
            bump: 254,
        }
    }

    #[test]
    fn test_footprint_tracks_string_payloads() {
        let record = escrow();
        assert_eq!(
            record.storage_size(),
            EscrowV1::BASE_SIZE + "Droid".len() + "https://example.com/".len()
        );

        let mut longer = record.clone();
        longer.uri.push_str("more/");
        assert_eq!(longer.storage_size(), record.storage_size() + 5);
    }

    #[test]
    fn test_footprint_reserves_v2_counter_word() {
        let mut record = escrow();
        let base = record.storage_size();
        record.path = PathFlags::from_features(&[PathFeature::RerollMetadataV2]);
        assert_eq!(record.storage_size(), base + 2);
    }

    #[test]
    fn test_swap_counter_semantics() {
        let mut record = escrow();
        assert!(!record.has_swapped());
        record.count = 2;
        assert!(record.has_swapped());
    }

    #[test]
    fn test_record_serde_round_trip() {
        let record = escrow();
        let json = serde_json::to_string(&record).unwrap();
        let back: EscrowV1 = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
