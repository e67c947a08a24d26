//! Record Lifecycle
//!
//! Init and update operations for every record kind. All checks run before
//! any field is written: updates are staged on a copy and committed only
//! once every invariant holds, so a failed update leaves the record
//! byte-identical to its pre-call state.
//!
//! Updates return the record's new storage footprint so the caller can
//! grow or shrink the backing storage to exactly fit (reallocate-on-update
//! semantics).

use lib_ledger::{AssetLedger, TokenLedger};
use lib_types::{AccountKey, Amount};

use crate::errors::{StateError, StateResult};
use crate::escrow::{EscrowV1, EscrowV2};
use crate::nft_override::NftOverrideV1;
use crate::path::PathFlags;
use crate::recipe::RecipeV1;

/// Upper bound on a record's storage footprint. The surrounding ledger
/// cannot grow an account past this in one reallocation.
pub const MAX_RECORD_SIZE: usize = 10_240;

// ============================================================================
// INIT ARGUMENTS
// ============================================================================

#[derive(Debug, Clone)]
pub struct InitEscrowArgs {
    pub name: String,
    pub uri: String,
    pub max: Amount,
    pub min: Amount,
    pub amount: Amount,
    pub fee_amount: Amount,
    pub sol_fee_amount: Amount,
    pub path: PathFlags,
}

#[derive(Debug, Clone)]
pub struct InitRecipeArgs {
    pub name: String,
    pub uri: String,
    pub max: Amount,
    pub min: Amount,
    pub amount: Amount,
    pub fee_amount_capture: Amount,
    pub fee_amount_release: Amount,
    pub sol_fee_amount_capture: Amount,
    pub sol_fee_amount_release: Amount,
    pub path: PathFlags,
}

#[derive(Debug, Clone)]
pub struct InitNftOverrideArgs {
    pub name: String,
    pub uri: String,
    pub max: Amount,
    pub min: Amount,
    pub amount: Amount,
    pub fee_amount: Amount,
    pub sol_fee_amount: Amount,
    pub path: PathFlags,
}

// ============================================================================
// UPDATE ARGUMENTS (optional-field patches)
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct UpdateEscrowArgs {
    pub name: Option<String>,
    pub uri: Option<String>,
    pub max: Option<Amount>,
    pub min: Option<Amount>,
    pub amount: Option<Amount>,
    pub fee_amount: Option<Amount>,
    pub sol_fee_amount: Option<Amount>,
    pub path: Option<PathFlags>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateRecipeArgs {
    pub name: Option<String>,
    pub uri: Option<String>,
    pub max: Option<Amount>,
    pub min: Option<Amount>,
    pub amount: Option<Amount>,
    pub fee_amount_capture: Option<Amount>,
    pub fee_amount_release: Option<Amount>,
    pub sol_fee_amount_capture: Option<Amount>,
    pub sol_fee_amount_release: Option<Amount>,
    pub path: Option<PathFlags>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateNftOverrideArgs {
    pub name: Option<String>,
    pub uri: Option<String>,
    pub max: Option<Amount>,
    pub min: Option<Amount>,
    pub amount: Option<Amount>,
    pub fee_amount: Option<Amount>,
    pub sol_fee_amount: Option<Amount>,
    pub path: Option<PathFlags>,
}

// ============================================================================
// SHARED CHECKS
// ============================================================================

fn ensure_bounds(min: Amount, max: Amount) -> StateResult<()> {
    if max < min {
        return Err(StateError::MaxMustBeGreaterThanMin);
    }
    Ok(())
}

fn ensure_collection(
    assets: &dyn AssetLedger,
    collection: &AccountKey,
    authority: &AccountKey,
) -> StateResult<()> {
    if !assets.is_collection(collection) {
        return Err(StateError::InvalidCollectionAccount);
    }
    let collection_authority = assets
        .collection_authority(collection)
        .map_err(|_| StateError::InvalidCollectionAccount)?;
    if collection_authority != *authority {
        return Err(StateError::InvalidCollectionAuthority);
    }
    Ok(())
}

fn ensure_mint(tokens: &dyn TokenLedger, mint: &AccountKey) -> StateResult<()> {
    if !tokens.mint_exists(mint) {
        return Err(StateError::MintNotInitialized);
    }
    Ok(())
}

fn ensure_size(size: usize) -> StateResult<usize> {
    if size > MAX_RECORD_SIZE {
        return Err(StateError::RecordTooLarge {
            size,
            max: MAX_RECORD_SIZE,
        });
    }
    Ok(size)
}

// ============================================================================
// INIT
// ============================================================================

/// Initialize a collection-scoped escrow. Counter seeds at 1 ("no swap yet
/// performed").
#[allow(clippy::too_many_arguments)]
pub fn init_escrow_v1(
    assets: &dyn AssetLedger,
    tokens: &dyn TokenLedger,
    collection: AccountKey,
    authority: AccountKey,
    token: AccountKey,
    fee_location: AccountKey,
    bump: u8,
    args: InitEscrowArgs,
) -> StateResult<EscrowV1> {
    ensure_bounds(args.min, args.max)?;
    ensure_collection(assets, &collection, &authority)?;
    ensure_mint(tokens, &token)?;

    let escrow = EscrowV1 {
        collection,
        authority,
        token,
        fee_location,
        name: args.name,
        uri: args.uri,
        max: args.max,
        min: args.min,
        amount: args.amount,
        fee_amount: args.fee_amount,
        sol_fee_amount: args.sol_fee_amount,
        count: 1,
        path: args.path,
        bump,
    };
    ensure_size(escrow.storage_size())?;
    Ok(escrow)
}

/// Initialize an authority-scoped shared custody escrow.
pub fn init_escrow_v2(authority: AccountKey, bump: u8) -> EscrowV2 {
    EscrowV2::new(authority, bump)
}

/// Initialize the economics recipe for a collection. Counter seeds at 1.
#[allow(clippy::too_many_arguments)]
pub fn init_recipe_v1(
    assets: &dyn AssetLedger,
    tokens: &dyn TokenLedger,
    collection: AccountKey,
    authority: AccountKey,
    token: AccountKey,
    fee_location: AccountKey,
    bump: u8,
    args: InitRecipeArgs,
) -> StateResult<RecipeV1> {
    ensure_bounds(args.min, args.max)?;
    ensure_collection(assets, &collection, &authority)?;
    ensure_mint(tokens, &token)?;

    let recipe = RecipeV1 {
        collection,
        authority,
        token,
        fee_location,
        name: args.name,
        uri: args.uri,
        max: args.max,
        min: args.min,
        amount: args.amount,
        fee_amount_capture: args.fee_amount_capture,
        fee_amount_release: args.fee_amount_release,
        sol_fee_amount_capture: args.sol_fee_amount_capture,
        sol_fee_amount_release: args.sol_fee_amount_release,
        count: 1,
        path: args.path,
        bump,
    };
    ensure_size(recipe.storage_size())?;
    Ok(recipe)
}

/// Initialize a per-asset override. Counter seeds at 0 (no override swap
/// yet). The asset must exist, belong to the declared collection, and the
/// collection authority must match the signer.
#[allow(clippy::too_many_arguments)]
pub fn init_nft_override_v1(
    assets: &dyn AssetLedger,
    tokens: &dyn TokenLedger,
    asset: AccountKey,
    collection: AccountKey,
    authority: AccountKey,
    token: AccountKey,
    fee_location: AccountKey,
    bump: u8,
    args: InitNftOverrideArgs,
) -> StateResult<NftOverrideV1> {
    ensure_bounds(args.min, args.max)?;

    let asset_collection = assets
        .collection_of(&asset)
        .map_err(|_| StateError::InvalidAssetAccount)?;
    if asset_collection != collection {
        return Err(StateError::InvalidCollection);
    }
    ensure_collection(assets, &collection, &authority)?;
    ensure_mint(tokens, &token)?;

    let record = NftOverrideV1 {
        authority,
        token,
        fee_location,
        name: args.name,
        uri: args.uri,
        max: args.max,
        min: args.min,
        amount: args.amount,
        fee_amount: args.fee_amount,
        sol_fee_amount: args.sol_fee_amount,
        count: 0,
        path: args.path,
        bump,
    };
    ensure_size(record.storage_size())?;
    Ok(record)
}

// ============================================================================
// UPDATE
// ============================================================================

/// Patch a collection-scoped escrow. Returns the new storage footprint the
/// backing account must be reallocated to.
pub fn update_escrow_v1(
    assets: &dyn AssetLedger,
    escrow: &mut EscrowV1,
    authority: AccountKey,
    args: UpdateEscrowArgs,
) -> StateResult<usize> {
    ensure_collection(assets, &escrow.collection, &authority)?;

    // Stage on a copy; commit only after every invariant holds.
    let mut staged = escrow.clone();
    if let Some(name) = args.name {
        staged.name = name;
    }
    if let Some(uri) = args.uri {
        staged.uri = uri;
    }
    if let Some(max) = args.max {
        staged.max = max;
    }
    if let Some(min) = args.min {
        staged.min = min;
    }
    if let Some(amount) = args.amount {
        staged.amount = amount;
    }
    if let Some(fee_amount) = args.fee_amount {
        staged.fee_amount = fee_amount;
    }
    if let Some(sol_fee_amount) = args.sol_fee_amount {
        staged.sol_fee_amount = sol_fee_amount;
    }
    if let Some(path) = args.path {
        // Immutable after the first swap. Count seeds at 1, so 1 == no swaps.
        if escrow.has_swapped() && escrow.path != path {
            return Err(StateError::PathCannotBeSet);
        }
        staged.path = path;
    }

    ensure_bounds(staged.min, staged.max)?;
    let size = ensure_size(staged.storage_size())?;
    *escrow = staged;
    Ok(size)
}

/// Patch an economics recipe. Same invariants as the escrow update.
pub fn update_recipe_v1(
    assets: &dyn AssetLedger,
    recipe: &mut RecipeV1,
    authority: AccountKey,
    args: UpdateRecipeArgs,
) -> StateResult<usize> {
    ensure_collection(assets, &recipe.collection, &authority)?;

    let mut staged = recipe.clone();
    if let Some(name) = args.name {
        staged.name = name;
    }
    if let Some(uri) = args.uri {
        staged.uri = uri;
    }
    if let Some(max) = args.max {
        staged.max = max;
    }
    if let Some(min) = args.min {
        staged.min = min;
    }
    if let Some(amount) = args.amount {
        staged.amount = amount;
    }
    if let Some(fee) = args.fee_amount_capture {
        staged.fee_amount_capture = fee;
    }
    if let Some(fee) = args.fee_amount_release {
        staged.fee_amount_release = fee;
    }
    if let Some(fee) = args.sol_fee_amount_capture {
        staged.sol_fee_amount_capture = fee;
    }
    if let Some(fee) = args.sol_fee_amount_release {
        staged.sol_fee_amount_release = fee;
    }
    if let Some(path) = args.path {
        if recipe.has_swapped() && recipe.path != path {
            return Err(StateError::PathCannotBeSet);
        }
        staged.path = path;
    }

    ensure_bounds(staged.min, staged.max)?;
    let size = ensure_size(staged.storage_size())?;
    *recipe = staged;
    Ok(size)
}

/// Patch a per-asset override. The override counter seeds at 0 and `path`
/// is not gated on it. Authority is checked through the asset's collection.
pub fn update_nft_override_v1(
    assets: &dyn AssetLedger,
    record: &mut NftOverrideV1,
    asset: AccountKey,
    authority: AccountKey,
    args: UpdateNftOverrideArgs,
) -> StateResult<usize> {
    let collection = assets
        .collection_of(&asset)
        .map_err(|_| StateError::InvalidAssetAccount)?;
    ensure_collection(assets, &collection, &authority)?;

    let mut staged = record.clone();
    if let Some(name) = args.name {
        staged.name = name;
    }
    if let Some(uri) = args.uri {
        staged.uri = uri;
    }
    if let Some(max) = args.max {
        staged.max = max;
    }
    if let Some(min) = args.min {
        staged.min = min;
    }
    if let Some(amount) = args.amount {
        staged.amount = amount;
    }
    if let Some(fee_amount) = args.fee_amount {
        staged.fee_amount = fee_amount;
    }
    if let Some(sol_fee_amount) = args.sol_fee_amount {
        staged.sol_fee_amount = sol_fee_amount;
    }
    if let Some(path) = args.path {
        staged.path = path;
    }

    ensure_bounds(staged.min, staged.max)?;
    let size = ensure_size(staged.storage_size())?;
    *record = staged;
    Ok(size)
}
