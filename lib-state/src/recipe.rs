//! Recipe Record (economics form)

use serde::{Deserialize, Serialize};

use lib_types::{AccountKey, Amount};

use crate::path::{PathFeature, PathFlags};

/// Collection-scoped swap economics decoupled from custody. Captures and
/// releases against this record move value through the paired
/// authority-scoped [`crate::EscrowV2`] custody account, and each direction
/// carries its own fee schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeV1 {
    pub collection: AccountKey,
    pub authority: AccountKey,
    pub token: AccountKey,
    pub fee_location: AccountKey,
    pub name: String,
    pub uri: String,
    pub max: Amount,
    pub min: Amount,
    /// Token cost of one swap
    pub amount: Amount,
    /// Mint-denominated fee charged on capture
    pub fee_amount_capture: Amount,
    /// Mint-denominated fee charged on release
    pub fee_amount_release: Amount,
    /// Native project fee charged on capture
    pub sol_fee_amount_capture: Amount,
    /// Native project fee charged on release
    pub sol_fee_amount_release: Amount,
    /// Swap counter, seeded at 1 ("no swap yet performed")
    pub count: u64,
    pub path: PathFlags,
    pub bump: u8,
}

impl RecipeV1 {
    pub const BASE_SIZE: usize = 8 + 32 * 4 + 4 + 4 + 8 * 7 + 8 + 2 + 1;

    pub fn has_swapped(&self) -> bool {
        self.count > 1
    }

    pub fn storage_size(&self) -> usize {
        let mut size = Self::BASE_SIZE + self.name.len() + self.uri.len();
        if self.path.test(PathFeature::RerollMetadataV2) {
            size += 2;
        }
        size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footprint_tracks_strings() {
        let record = RecipeV1 {
            collection: AccountKey::zero(),
            authority: AccountKey::zero(),
            token: AccountKey::zero(),
            fee_location: AccountKey::zero(),
            name: "abc".to_string(),
            uri: "defgh".to_string(),
            max: 10,
            min: 0,
            amount: 1,
            fee_amount_capture: 0,
            fee_amount_release: 0,
            sol_fee_amount_capture: 0,
            sol_fee_amount_release: 0,
            count: 1,
            path: PathFlags::empty(),
            bump: 255,
        };
        assert_eq!(record.storage_size(), RecipeV1::BASE_SIZE + 3 + 5);
    }
}
