//! Ledger Collaborator Traits
//!
//! These traits define the minimal interfaces the engines need from the
//! surrounding ledger. Implementations are provided by the host; the engines
//! treat every method as atomic (exact amount moved, or error with no
//! effect).

use lib_types::{AccountKey, Amount};

use crate::errors::LedgerResult;

/// Fungible-balance operations, keyed by (mint, holder)
pub trait TokenLedger {
    /// Whether the mint has been created by its owning system
    fn mint_exists(&self, mint: &AccountKey) -> bool;

    /// Current balance of `holder` in `mint` units (zero if never credited)
    fn balance(&self, mint: &AccountKey, holder: &AccountKey) -> LedgerResult<Amount>;

    /// Move `amount` of `mint` from `from` to `to`
    fn transfer(
        &self,
        mint: &AccountKey,
        from: &AccountKey,
        to: &AccountKey,
        amount: Amount,
    ) -> LedgerResult<()>;

    /// Destroy `amount` of `mint` held by `from`
    fn burn(&self, mint: &AccountKey, from: &AccountKey, amount: Amount) -> LedgerResult<()>;
}

/// Asset registry operations: custody changes, metadata rewrite, and the
/// collection queries the record lifecycle validates against
pub trait AssetLedger {
    /// Whether `key` refers to a collection record in the asset registry
    fn is_collection(&self, key: &AccountKey) -> bool;

    /// The update authority of a collection
    fn collection_authority(&self, collection: &AccountKey) -> LedgerResult<AccountKey>;

    /// The collection an asset belongs to
    fn collection_of(&self, asset: &AccountKey) -> LedgerResult<AccountKey>;

    /// The current owner of an asset
    fn owner_of(&self, asset: &AccountKey) -> LedgerResult<AccountKey>;

    /// Move asset custody from `from` to `to`; fails unless `from` owns it
    fn transfer_asset(
        &self,
        asset: &AccountKey,
        from: &AccountKey,
        to: &AccountKey,
    ) -> LedgerResult<()>;

    /// Rewrite an asset's display name and URI
    fn set_metadata(&self, asset: &AccountKey, name: String, uri: String) -> LedgerResult<()>;
}

/// Native-currency operations
pub trait NativeLedger {
    /// Current native balance of `account` (zero if never funded)
    fn native_balance(&self, account: &AccountKey) -> LedgerResult<Amount>;

    /// Move `amount` of native currency from `from` to `to`
    fn transfer_native(
        &self,
        from: &AccountKey,
        to: &AccountKey,
        amount: Amount,
    ) -> LedgerResult<()>;
}
