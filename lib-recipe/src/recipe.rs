//! Recipe Definition
//!
//! The ingredient and trigger vocabularies plus the recipe record itself.
//! Input and output list lengths are fixed at creation; fulfillment state
//! lives in the per-payer checklist, never here.

use lib_types::{AccountKey, Amount};
use serde::{Deserialize, Serialize};

/// One side of a recipe slot: the thing that must be moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ingredient {
    /// Placeholder slot, satisfied at checklist creation
    None,
    /// A fixed amount of native currency
    Sol(Amount),
    /// One specific asset
    CoreAsset(AccountKey),
    /// Any asset from the given collection
    CoreCollection(AccountKey),
    /// A fixed amount of the given mint
    SplToken(AccountKey, Amount),
}

impl Ingredient {
    pub fn is_none(&self) -> bool {
        matches!(self, Ingredient::None)
    }
}

/// Side effect fired when a slot's ingredient moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trigger {
    None,
    /// Rewrite the moved asset's display name and URI
    Rename {
        name: String,
        uri: String,
        max: Amount,
        min: Amount,
    },
    /// Charge the payer a native fee
    SolFee {
        amount: Amount,
        fee_account: AccountKey,
    },
    /// Charge the payer a fee in the slot's mint. `fee_token_account`
    /// names the destination's derived token account on ledgers that
    /// distinguish holders from token accounts.
    TokenFee {
        amount: Amount,
        fee_account: AccountKey,
        fee_token_account: AccountKey,
    },
}

impl Trigger {
    pub fn is_none(&self) -> bool {
        matches!(self, Trigger::None)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientTriggerPair {
    pub ingredient: Ingredient,
    pub trigger: Trigger,
}

/// A generic swap recipe. `count` tallies completed fulfillments and seeds
/// at 0; checklist creation never touches it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericRecipe {
    pub authority: AccountKey,
    pub count: u64,
    pub reversible: bool,
    pub bump: u8,
    pub inputs: Vec<IngredientTriggerPair>,
    pub outputs: Vec<IngredientTriggerPair>,
}

impl GenericRecipe {
    pub fn new(
        authority: AccountKey,
        reversible: bool,
        bump: u8,
        inputs: Vec<IngredientTriggerPair>,
        outputs: Vec<IngredientTriggerPair>,
    ) -> Self {
        Self {
            authority,
            count: 0,
            reversible,
            bump,
            inputs,
            outputs,
        }
    }

    /// The slots a deposit fills for the given direction.
    pub fn deposit_side(&self, reversed: bool) -> &[IngredientTriggerPair] {
        if reversed {
            &self.outputs
        } else {
            &self.inputs
        }
    }

    /// The slots a withdraw drains for the given direction.
    pub fn withdraw_side(&self, reversed: bool) -> &[IngredientTriggerPair] {
        if reversed {
            &self.inputs
        } else {
            &self.outputs
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(tag: u8) -> AccountKey {
        AccountKey::new([tag; 32])
    }

    fn recipe() -> GenericRecipe {
        GenericRecipe::new(
            key(1),
            true,
            255,
            vec![IngredientTriggerPair {
                ingredient: Ingredient::CoreCollection(key(2)),
                trigger: Trigger::None,
            }],
            vec![IngredientTriggerPair {
                ingredient: Ingredient::SplToken(key(3), 100),
                trigger: Trigger::None,
            }],
        )
    }

    #[test]
    fn test_side_selection_follows_direction() {
        let recipe = recipe();
        assert_eq!(recipe.deposit_side(false), recipe.inputs.as_slice());
        assert_eq!(recipe.deposit_side(true), recipe.outputs.as_slice());
        assert_eq!(recipe.withdraw_side(false), recipe.outputs.as_slice());
        assert_eq!(recipe.withdraw_side(true), recipe.inputs.as_slice());
    }

    #[test]
    fn test_recipe_serde_round_trip() {
        let recipe = recipe();
        let json = serde_json::to_string(&recipe).unwrap();
        let back: GenericRecipe = serde_json::from_str(&json).unwrap();
        assert_eq!(recipe, back);
    }
}
