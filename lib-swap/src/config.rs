//! Protocol-level fee configuration.
//!
//! The fee wallet and per-swap protocol fee are deployment constants, not
//! record state. They are injected into the engine at construction so tests
//! and embedders can choose their own.

use lib_types::{AccountKey, Amount};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolConfig {
    /// Account credited with the flat protocol fee on every swap
    pub fee_wallet: AccountKey,
    /// Flat native fee charged to the payer on every capture and release
    pub protocol_fee: Amount,
}

impl ProtocolConfig {
    pub fn new(fee_wallet: AccountKey, protocol_fee: Amount) -> Self {
        Self {
            fee_wallet,
            protocol_fee,
        }
    }
}
