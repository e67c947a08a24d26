//! Ledger Collaborator Errors

use lib_types::{AccountKey, Amount};
use thiserror::Error;

/// Error during a ledger collaborator call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Unknown account: {0:?}")]
    UnknownAccount(AccountKey),

    #[error("Unknown asset: {0:?}")]
    UnknownAsset(AccountKey),

    #[error("Unknown mint: {0:?}")]
    UnknownMint(AccountKey),

    #[error("Insufficient token balance: have {have}, need {need}")]
    InsufficientBalance { have: Amount, need: Amount },

    #[error("Insufficient native balance: have {have}, need {need}")]
    InsufficientNative { have: Amount, need: Amount },

    #[error("Asset {asset:?} is not owned by {expected:?}")]
    NotAssetOwner {
        asset: AccountKey,
        expected: AccountKey,
    },

    #[error("Arithmetic overflow")]
    Overflow,
}

/// Result type for ledger collaborator calls
pub type LedgerResult<T> = Result<T, LedgerError>;
