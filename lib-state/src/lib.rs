//! Swap configuration records and their lifecycle rules.
//!
//! This crate defines the persisted record types the swap engines operate
//! on, plus the init/update operations with their invariants.
//!
//! # Key Types
//!
//! - [`PathFlags`]: bitmask of optional swap behaviors (block, burn, reroll)
//! - [`EscrowV1`]: collection-scoped escrow (custody + economics)
//! - [`EscrowV2`]: authority-scoped shared custody record
//! - [`RecipeV1`]: collection-scoped economics decoupled from custody
//! - [`NftOverrideV1`]: per-asset swap parameter override
//!
//! # Invariants
//!
//! 1. **Bounds**: `min <= max` at init and after every update
//! 2. **Path immutability**: `path` can only change while no swap has
//!    occurred (`count == 1` for escrow/recipe records)
//! 3. **Footprint**: storage size tracks `base + name + uri` exactly and is
//!    bounded by [`MAX_RECORD_SIZE`]

pub mod errors;
pub mod escrow;
pub mod lifecycle;
pub mod nft_override;
pub mod path;
pub mod recipe;

pub use errors::{StateError, StateResult};
pub use escrow::{EscrowV1, EscrowV2};
pub use lifecycle::{
    init_escrow_v1, init_escrow_v2, init_nft_override_v1, init_recipe_v1, update_escrow_v1,
    update_nft_override_v1, update_recipe_v1, InitEscrowArgs, InitNftOverrideArgs, InitRecipeArgs,
    UpdateEscrowArgs, UpdateNftOverrideArgs, UpdateRecipeArgs, MAX_RECORD_SIZE,
};
pub use nft_override::NftOverrideV1;
pub use path::{PathFeature, PathFlags};
pub use recipe::RecipeV1;
