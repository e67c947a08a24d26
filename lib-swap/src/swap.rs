//! Capture and Release
//!
//! Capture moves an asset out of custody to the payer and pulls the token
//! side (plus fees) from the payer. Release is the inverse. Every operation
//! validates the full precondition set before the first ledger write, so a
//! failure at any rule leaves records and balances untouched.
//!
//! The v1 path swaps against a collection escrow that is both custody and
//! economics. The v2 path reads economics from a `RecipeV1` and keeps
//! custody at a shared `EscrowV2` account. A per-asset `NftOverrideV1`
//! record, when supplied, takes precedence over the v1 escrow's economics
//! and tracks its own swap counter.

use lib_ledger::{AssetLedger, LedgerError, NativeLedger, TokenLedger};
use lib_state::{EscrowV1, EscrowV2, NftOverrideV1, PathFeature, PathFlags, RecipeV1};
use lib_types::{AccountKey, Amount};
use tracing::{debug, info};

use crate::config::ProtocolConfig;
use crate::errors::{SwapError, SwapResult};

pub struct SwapEngine<'a> {
    config: ProtocolConfig,
    tokens: &'a dyn TokenLedger,
    assets: &'a dyn AssetLedger,
    native: &'a dyn NativeLedger,
}

/// The economics a single swap executes under, resolved from whichever
/// record governs it (escrow, recipe side, or per-asset override).
struct Economics {
    authority: AccountKey,
    token: AccountKey,
    fee_location: AccountKey,
    name: String,
    uri: String,
    amount: Amount,
    fee_amount: Amount,
    sol_fee_amount: Amount,
    path: PathFlags,
    count: u64,
}

impl Economics {
    fn of_escrow(escrow: &EscrowV1) -> Self {
        Self {
            authority: escrow.authority,
            token: escrow.token,
            fee_location: escrow.fee_location,
            name: escrow.name.clone(),
            uri: escrow.uri.clone(),
            amount: escrow.amount,
            fee_amount: escrow.fee_amount,
            sol_fee_amount: escrow.sol_fee_amount,
            path: escrow.path,
            count: escrow.count,
        }
    }

    fn of_override(record: &NftOverrideV1) -> Self {
        Self {
            authority: record.authority,
            token: record.token,
            fee_location: record.fee_location,
            name: record.name.clone(),
            uri: record.uri.clone(),
            amount: record.amount,
            fee_amount: record.fee_amount,
            sol_fee_amount: record.sol_fee_amount,
            path: record.path,
            count: record.count,
        }
    }

    fn of_recipe_capture(recipe: &RecipeV1) -> Self {
        Self {
            authority: recipe.authority,
            token: recipe.token,
            fee_location: recipe.fee_location,
            name: recipe.name.clone(),
            uri: recipe.uri.clone(),
            amount: recipe.amount,
            fee_amount: recipe.fee_amount_capture,
            sol_fee_amount: recipe.sol_fee_amount_capture,
            path: recipe.path,
            count: recipe.count,
        }
    }

    fn of_recipe_release(recipe: &RecipeV1) -> Self {
        Self {
            authority: recipe.authority,
            token: recipe.token,
            fee_location: recipe.fee_location,
            name: recipe.name.clone(),
            uri: recipe.uri.clone(),
            amount: recipe.amount,
            fee_amount: recipe.fee_amount_release,
            sol_fee_amount: recipe.sol_fee_amount_release,
            path: recipe.path,
            count: recipe.count,
        }
    }
}

impl<'a> SwapEngine<'a> {
    pub fn new(
        config: ProtocolConfig,
        tokens: &'a dyn TokenLedger,
        assets: &'a dyn AssetLedger,
        native: &'a dyn NativeLedger,
    ) -> Self {
        Self {
            config,
            tokens,
            assets,
            native,
        }
    }

    /// Capture against a collection escrow: the asset leaves custody, the
    /// payer supplies `amount` of the record's token plus fees.
    ///
    /// When `override_record` is supplied its economics replace the
    /// escrow's and its counter is the one that advances; the escrow record
    /// is left untouched.
    pub fn capture_v1(
        &self,
        escrow: &mut EscrowV1,
        escrow_address: &AccountKey,
        override_record: Option<&mut NftOverrideV1>,
        payer: &AccountKey,
        authority: &AccountKey,
        asset: &AccountKey,
    ) -> SwapResult<()> {
        let econ = match override_record.as_deref() {
            Some(record) => Economics::of_override(record),
            None => Economics::of_escrow(escrow),
        };
        debug!(%asset, %payer, count = econ.count, "capture v1");

        let next_count =
            self.check_capture(&econ, &escrow.collection, escrow_address, payer, authority, asset)?;
        self.apply_capture(&econ, escrow_address, payer, asset)?;

        match override_record {
            Some(record) => record.count = next_count,
            None => escrow.count = next_count,
        }
        info!(%asset, %payer, count = next_count, "capture v1 applied");
        Ok(())
    }

    /// Release against a collection escrow: the asset returns to custody,
    /// the payer receives `amount` of the record's token and pays fees.
    pub fn release_v1(
        &self,
        escrow: &mut EscrowV1,
        escrow_address: &AccountKey,
        override_record: Option<&mut NftOverrideV1>,
        payer: &AccountKey,
        authority: &AccountKey,
        asset: &AccountKey,
    ) -> SwapResult<()> {
        let econ = match override_record.as_deref() {
            Some(record) => Economics::of_override(record),
            None => Economics::of_escrow(escrow),
        };
        debug!(%asset, %payer, count = econ.count, "release v1");

        let next_count =
            self.check_release(&econ, &escrow.collection, escrow_address, payer, authority, asset)?;
        self.apply_release(&econ, escrow_address, payer, asset)?;

        match override_record {
            Some(record) => record.count = next_count,
            None => escrow.count = next_count,
        }
        info!(%asset, %payer, count = next_count, "release v1 applied");
        Ok(())
    }

    /// Capture against a recipe, with custody at the paired shared escrow.
    /// Uses the recipe's capture-side fees; the v2 reroll URI is fixed.
    pub fn capture_v2(
        &self,
        recipe: &mut RecipeV1,
        escrow: &EscrowV2,
        escrow_address: &AccountKey,
        payer: &AccountKey,
        authority: &AccountKey,
        asset: &AccountKey,
    ) -> SwapResult<()> {
        if recipe.authority != escrow.authority {
            return Err(SwapError::InvalidAuthority);
        }
        let econ = Economics::of_recipe_capture(recipe);
        debug!(%asset, %payer, count = econ.count, "capture v2");

        let next_count =
            self.check_capture(&econ, &recipe.collection, escrow_address, payer, authority, asset)?;

        // v2 rerolls to a fixed suffix instead of a counter-derived one.
        if econ.path.rerolls_on_capture() {
            let uri = format!("{}captured.json", econ.uri);
            self.assets.set_metadata(asset, econ.name.clone(), uri)?;
        }
        self.assets.transfer_asset(asset, escrow_address, payer)?;
        self.settle_capture_funds(&econ, escrow_address, payer)?;

        recipe.count = next_count;
        info!(%asset, %payer, count = next_count, "capture v2 applied");
        Ok(())
    }

    /// Release against a recipe, with custody at the paired shared escrow.
    /// Uses the recipe's release-side fees; never rerolls metadata.
    pub fn release_v2(
        &self,
        recipe: &mut RecipeV1,
        escrow: &EscrowV2,
        escrow_address: &AccountKey,
        payer: &AccountKey,
        authority: &AccountKey,
        asset: &AccountKey,
    ) -> SwapResult<()> {
        if recipe.authority != escrow.authority {
            return Err(SwapError::InvalidAuthority);
        }
        let econ = Economics::of_recipe_release(recipe);
        debug!(%asset, %payer, count = econ.count, "release v2");

        let next_count =
            self.check_release(&econ, &recipe.collection, escrow_address, payer, authority, asset)?;
        self.apply_release(&econ, escrow_address, payer, asset)?;

        recipe.count = next_count;
        info!(%asset, %payer, count = next_count, "release v2 applied");
        Ok(())
    }

    // =========================================================================
    // Validation (no mutation past this section on failure)
    // =========================================================================

    /// Full capture precondition set. Returns the committed counter value.
    fn check_capture(
        &self,
        econ: &Economics,
        collection: &AccountKey,
        custody: &AccountKey,
        payer: &AccountKey,
        authority: &AccountKey,
        asset: &AccountKey,
    ) -> SwapResult<u64> {
        if econ.path.test(PathFeature::BlockCapture) {
            return Err(SwapError::CaptureBlocked);
        }
        ensure_update_authority(authority, &econ.authority, custody)?;
        self.ensure_asset_membership(asset, collection)?;
        self.ensure_asset_holder(asset, custody)?;
        self.ensure_token_funds(&econ.token, payer, econ.amount, econ.fee_amount)?;
        self.ensure_native_funds(payer, econ.sol_fee_amount)?;
        econ.count
            .checked_add(1)
            .ok_or(SwapError::NumericalOverflow)
    }

    /// Full release precondition set. Returns the committed counter value.
    fn check_release(
        &self,
        econ: &Economics,
        collection: &AccountKey,
        custody: &AccountKey,
        payer: &AccountKey,
        authority: &AccountKey,
        asset: &AccountKey,
    ) -> SwapResult<u64> {
        if econ.path.test(PathFeature::BlockRelease) {
            return Err(SwapError::ReleaseBlocked);
        }
        ensure_update_authority(authority, &econ.authority, custody)?;
        self.ensure_asset_membership(asset, collection)?;
        self.ensure_asset_holder(asset, payer)?;
        // Custody pays out the amount; the payer covers only the fees.
        self.ensure_token_funds(&econ.token, custody, econ.amount, 0)?;
        self.ensure_token_funds(&econ.token, payer, econ.fee_amount, 0)?;
        self.ensure_native_funds(payer, econ.sol_fee_amount)?;
        econ.count
            .checked_add(1)
            .ok_or(SwapError::NumericalOverflow)
    }

    fn ensure_asset_membership(
        &self,
        asset: &AccountKey,
        collection: &AccountKey,
    ) -> SwapResult<()> {
        let member_of = self
            .assets
            .collection_of(asset)
            .map_err(|_| SwapError::InvalidAssetAccount)?;
        if member_of != *collection {
            return Err(SwapError::InvalidCollection);
        }
        Ok(())
    }

    fn ensure_asset_holder(&self, asset: &AccountKey, holder: &AccountKey) -> SwapResult<()> {
        let owner = self.assets.owner_of(asset)?;
        if owner != *holder {
            return Err(SwapError::InvalidAssetAccount);
        }
        Ok(())
    }

    fn ensure_token_funds(
        &self,
        token: &AccountKey,
        holder: &AccountKey,
        amount: Amount,
        fee: Amount,
    ) -> SwapResult<()> {
        let need = amount.checked_add(fee).ok_or(SwapError::NumericalOverflow)?;
        let have = self.tokens.balance(token, holder)?;
        if have < need {
            return Err(LedgerError::InsufficientBalance { have, need }.into());
        }
        Ok(())
    }

    fn ensure_native_funds(&self, payer: &AccountKey, sol_fee: Amount) -> SwapResult<()> {
        let need = self
            .config
            .protocol_fee
            .checked_add(sol_fee)
            .ok_or(SwapError::NumericalOverflow)?;
        let have = self.native.native_balance(payer)?;
        if have < need {
            return Err(LedgerError::InsufficientNative { have, need }.into());
        }
        Ok(())
    }

    // =========================================================================
    // Mutation (preconditions already hold)
    // =========================================================================

    fn apply_capture(
        &self,
        econ: &Economics,
        custody: &AccountKey,
        payer: &AccountKey,
        asset: &AccountKey,
    ) -> SwapResult<()> {
        // Reroll uses the pre-increment counter, so the first capture of a
        // fresh escrow (count 1) lands on "<uri>1.json".
        if econ.path.rerolls_on_capture() {
            let uri = format!("{}{}.json", econ.uri, econ.count);
            self.assets.set_metadata(asset, econ.name.clone(), uri)?;
        }
        self.assets.transfer_asset(asset, custody, payer)?;
        self.settle_capture_funds(econ, custody, payer)
    }

    fn settle_capture_funds(
        &self,
        econ: &Economics,
        custody: &AccountKey,
        payer: &AccountKey,
    ) -> SwapResult<()> {
        if econ.path.test(PathFeature::BurnOnCapture) {
            self.tokens.burn(&econ.token, payer, econ.amount)?;
        } else {
            self.tokens
                .transfer(&econ.token, payer, custody, econ.amount)?;
        }
        self.tokens
            .transfer(&econ.token, payer, &econ.fee_location, econ.fee_amount)?;
        self.native
            .transfer_native(payer, &self.config.fee_wallet, self.config.protocol_fee)?;
        self.native
            .transfer_native(payer, &econ.fee_location, econ.sol_fee_amount)?;
        Ok(())
    }

    fn apply_release(
        &self,
        econ: &Economics,
        custody: &AccountKey,
        payer: &AccountKey,
        asset: &AccountKey,
    ) -> SwapResult<()> {
        self.assets.transfer_asset(asset, payer, custody)?;
        if econ.path.test(PathFeature::BurnOnRelease) {
            self.tokens.burn(&econ.token, custody, econ.amount)?;
        } else {
            self.tokens
                .transfer(&econ.token, custody, payer, econ.amount)?;
        }
        self.tokens
            .transfer(&econ.token, payer, &econ.fee_location, econ.fee_amount)?;
        self.native
            .transfer_native(payer, &self.config.fee_wallet, self.config.protocol_fee)?;
        self.native
            .transfer_native(payer, &econ.fee_location, econ.sol_fee_amount)?;
        Ok(())
    }
}

/// The swap signer must be the record authority or the custody account
/// itself (custody signs when the swap is driven through delegation).
fn ensure_update_authority(
    signer: &AccountKey,
    record_authority: &AccountKey,
    custody: &AccountKey,
) -> SwapResult<()> {
    if signer != record_authority && signer != custody {
        return Err(SwapError::InvalidUpdateAuthority);
    }
    Ok(())
}
