//! Swap Engine Errors

use lib_ledger::LedgerError;
use lib_state::StateError;
use thiserror::Error;

pub type SwapResult<T> = Result<T, SwapError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SwapError {
    /// The record's path blocks the capture direction
    #[error("capture is disabled for this record")]
    CaptureBlocked,

    /// The record's path blocks the release direction
    #[error("release is disabled for this record")]
    ReleaseBlocked,

    /// Signer does not match the record authority
    #[error("invalid authority")]
    InvalidAuthority,

    /// Signer is neither the record authority nor the custody account
    #[error("invalid update authority")]
    InvalidUpdateAuthority,

    /// The asset does not belong to the record's collection
    #[error("invalid collection")]
    InvalidCollection,

    /// The asset is not held by the expected account
    #[error("invalid asset account")]
    InvalidAssetAccount,

    /// Counter or fee arithmetic wrapped
    #[error("numerical overflow")]
    NumericalOverflow,

    #[error("state error: {0}")]
    State(#[from] StateError),

    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),
}
