//! In-memory ledger
//!
//! A single structure implementing all three collaborator traits, backed by
//! `RefCell` maps. The engine test suites drive it directly; it also serves
//! local simulation. It is not a ledger implementation: no signatures, no
//! locking, no persistence.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use lib_types::{AccountKey, Amount};

use crate::errors::{LedgerError, LedgerResult};
use crate::traits::{AssetLedger, NativeLedger, TokenLedger};

#[derive(Debug, Clone)]
struct AssetEntry {
    collection: AccountKey,
    owner: AccountKey,
    name: String,
    uri: String,
}

/// In-memory implementation of [`TokenLedger`], [`AssetLedger`] and
/// [`NativeLedger`]
#[derive(Default)]
pub struct MemoryLedger {
    mints: RefCell<HashSet<AccountKey>>,
    balances: RefCell<HashMap<(AccountKey, AccountKey), Amount>>,
    native: RefCell<HashMap<AccountKey, Amount>>,
    collections: RefCell<HashMap<AccountKey, AccountKey>>,
    assets: RefCell<HashMap<AccountKey, AssetEntry>>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a mint so `mint_exists` reports it
    pub fn register_mint(&self, mint: AccountKey) {
        self.mints.borrow_mut().insert(mint);
    }

    /// Credit `holder` with `amount` of `mint` (registers the mint)
    pub fn mint_to(&self, mint: AccountKey, holder: AccountKey, amount: Amount) {
        self.register_mint(mint);
        *self.balances.borrow_mut().entry((mint, holder)).or_insert(0) += amount;
    }

    /// Credit `account` with `amount` of native currency
    pub fn fund_native(&self, account: AccountKey, amount: Amount) {
        *self.native.borrow_mut().entry(account).or_insert(0) += amount;
    }

    /// Register a collection and its update authority
    pub fn insert_collection(&self, collection: AccountKey, authority: AccountKey) {
        self.collections.borrow_mut().insert(collection, authority);
    }

    /// Register an asset with its collection, owner and metadata
    pub fn insert_asset(
        &self,
        asset: AccountKey,
        collection: AccountKey,
        owner: AccountKey,
        name: &str,
        uri: &str,
    ) {
        self.assets.borrow_mut().insert(
            asset,
            AssetEntry {
                collection,
                owner,
                name: name.to_string(),
                uri: uri.to_string(),
            },
        );
    }

    /// Test accessor: token balance without the Result wrapper
    pub fn token_balance(&self, mint: &AccountKey, holder: &AccountKey) -> Amount {
        self.balances
            .borrow()
            .get(&(*mint, *holder))
            .copied()
            .unwrap_or(0)
    }

    /// Test accessor: native balance without the Result wrapper
    pub fn native_balance_of(&self, account: &AccountKey) -> Amount {
        self.native.borrow().get(account).copied().unwrap_or(0)
    }

    /// Test accessor: current asset owner
    pub fn asset_owner(&self, asset: &AccountKey) -> Option<AccountKey> {
        self.assets.borrow().get(asset).map(|entry| entry.owner)
    }

    /// Test accessor: current asset URI
    pub fn asset_uri(&self, asset: &AccountKey) -> Option<String> {
        self.assets
            .borrow()
            .get(asset)
            .map(|entry| entry.uri.clone())
    }

    /// Test accessor: current asset display name
    pub fn asset_name(&self, asset: &AccountKey) -> Option<String> {
        self.assets
            .borrow()
            .get(asset)
            .map(|entry| entry.name.clone())
    }
}

impl TokenLedger for MemoryLedger {
    fn mint_exists(&self, mint: &AccountKey) -> bool {
        self.mints.borrow().contains(mint)
    }

    fn balance(&self, mint: &AccountKey, holder: &AccountKey) -> LedgerResult<Amount> {
        if !self.mint_exists(mint) {
            return Err(LedgerError::UnknownMint(*mint));
        }
        Ok(self.token_balance(mint, holder))
    }

    fn transfer(
        &self,
        mint: &AccountKey,
        from: &AccountKey,
        to: &AccountKey,
        amount: Amount,
    ) -> LedgerResult<()> {
        if !self.mint_exists(mint) {
            return Err(LedgerError::UnknownMint(*mint));
        }
        let mut balances = self.balances.borrow_mut();
        let have = balances.get(&(*mint, *from)).copied().unwrap_or(0);
        if have < amount {
            return Err(LedgerError::InsufficientBalance { have, need: amount });
        }
        let credited = balances
            .get(&(*mint, *to))
            .copied()
            .unwrap_or(0)
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        balances.insert((*mint, *from), have - amount);
        balances.insert((*mint, *to), credited);
        Ok(())
    }

    fn burn(&self, mint: &AccountKey, from: &AccountKey, amount: Amount) -> LedgerResult<()> {
        if !self.mint_exists(mint) {
            return Err(LedgerError::UnknownMint(*mint));
        }
        let mut balances = self.balances.borrow_mut();
        let have = balances.get(&(*mint, *from)).copied().unwrap_or(0);
        if have < amount {
            return Err(LedgerError::InsufficientBalance { have, need: amount });
        }
        balances.insert((*mint, *from), have - amount);
        Ok(())
    }
}

impl AssetLedger for MemoryLedger {
    fn is_collection(&self, key: &AccountKey) -> bool {
        self.collections.borrow().contains_key(key)
    }

    fn collection_authority(&self, collection: &AccountKey) -> LedgerResult<AccountKey> {
        self.collections
            .borrow()
            .get(collection)
            .copied()
            .ok_or(LedgerError::UnknownAccount(*collection))
    }

    fn collection_of(&self, asset: &AccountKey) -> LedgerResult<AccountKey> {
        self.assets
            .borrow()
            .get(asset)
            .map(|entry| entry.collection)
            .ok_or(LedgerError::UnknownAsset(*asset))
    }

    fn owner_of(&self, asset: &AccountKey) -> LedgerResult<AccountKey> {
        self.assets
            .borrow()
            .get(asset)
            .map(|entry| entry.owner)
            .ok_or(LedgerError::UnknownAsset(*asset))
    }

    fn transfer_asset(
        &self,
        asset: &AccountKey,
        from: &AccountKey,
        to: &AccountKey,
    ) -> LedgerResult<()> {
        let mut assets = self.assets.borrow_mut();
        let entry = assets
            .get_mut(asset)
            .ok_or(LedgerError::UnknownAsset(*asset))?;
        if entry.owner != *from {
            return Err(LedgerError::NotAssetOwner {
                asset: *asset,
                expected: *from,
            });
        }
        entry.owner = *to;
        Ok(())
    }

    fn set_metadata(&self, asset: &AccountKey, name: String, uri: String) -> LedgerResult<()> {
        let mut assets = self.assets.borrow_mut();
        let entry = assets
            .get_mut(asset)
            .ok_or(LedgerError::UnknownAsset(*asset))?;
        entry.name = name;
        entry.uri = uri;
        Ok(())
    }
}

impl NativeLedger for MemoryLedger {
    fn native_balance(&self, account: &AccountKey) -> LedgerResult<Amount> {
        Ok(self.native_balance_of(account))
    }

    fn transfer_native(
        &self,
        from: &AccountKey,
        to: &AccountKey,
        amount: Amount,
    ) -> LedgerResult<()> {
        let mut native = self.native.borrow_mut();
        let have = native.get(from).copied().unwrap_or(0);
        if have < amount {
            return Err(LedgerError::InsufficientNative { have, need: amount });
        }
        let credited = native
            .get(to)
            .copied()
            .unwrap_or(0)
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        native.insert(*from, have - amount);
        native.insert(*to, credited);
        Ok(())
    }
}
