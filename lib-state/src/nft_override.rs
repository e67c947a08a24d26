//! Per-asset Override Record

use serde::{Deserialize, Serialize};

use lib_types::{AccountKey, Amount};

use crate::path::{PathFeature, PathFlags};

/// Per-asset swap parameters taking precedence over the collection-level
/// escrow when the asset carries one. Scoped to a single asset; its counter
/// seeds at 0 (no override swap yet) and counts override swaps only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NftOverrideV1 {
    pub authority: AccountKey,
    pub token: AccountKey,
    pub fee_location: AccountKey,
    pub name: String,
    pub uri: String,
    pub max: Amount,
    pub min: Amount,
    pub amount: Amount,
    pub fee_amount: Amount,
    pub sol_fee_amount: Amount,
    /// Override swap counter, seeded at 0
    pub count: u64,
    pub path: PathFlags,
    pub bump: u8,
}

impl NftOverrideV1 {
    pub const BASE_SIZE: usize = 8 + 32 * 3 + 4 + 4 + 8 * 5 + 8 + 2 + 1;

    pub fn storage_size(&self) -> usize {
        let mut size = Self::BASE_SIZE + self.name.len() + self.uri.len();
        if self.path.test(PathFeature::RerollMetadataV2) {
            size += 2;
        }
        size
    }
}
