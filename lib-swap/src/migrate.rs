//! Custody Migration
//!
//! Moves token balances held by a v1 collection escrow into the v2 shared
//! custody account, so existing deployments can adopt the recipe path
//! without draining and refunding users. Only balances move: neither
//! record's counters or economics are touched.

use lib_ledger::TokenLedger;
use lib_state::{EscrowV1, EscrowV2};
use lib_types::{AccountKey, Amount};
use tracing::info;

use crate::errors::{SwapError, SwapResult};

pub struct MigrationEngine<'a> {
    tokens: &'a dyn TokenLedger,
}

impl<'a> MigrationEngine<'a> {
    pub fn new(tokens: &'a dyn TokenLedger) -> Self {
        Self { tokens }
    }

    /// Move `amount` of the old escrow's token from its custody to the new
    /// shared custody. The signer must be the new escrow's authority.
    pub fn migrate_tokens(
        &self,
        old: &EscrowV1,
        old_address: &AccountKey,
        new: &EscrowV2,
        new_address: &AccountKey,
        authority: &AccountKey,
        amount: Amount,
    ) -> SwapResult<()> {
        if *authority != new.authority {
            return Err(SwapError::InvalidAuthority);
        }
        self.tokens
            .transfer(&old.token, old_address, new_address, amount)?;
        info!(token = %old.token, amount, "migrated custody balance");
        Ok(())
    }
}
