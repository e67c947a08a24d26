//! Ingredient Engine
//!
//! Executes deposits and withdrawals against a recipe and a payer's
//! checklist. Each operation fills exactly one slot: the first unchecked
//! slot on the active side whose ingredient matches what the caller
//! supplied. The checked bit doubles as the idempotence guard: a repeat
//! call finds no unchecked slot and fails before touching the ledger.
//!
//! Ordering inside an operation is fixed: resolve the slot, pre-validate
//! counter arithmetic and trigger funds, move the ingredient, set
//! `ingredient_checked`, fire the trigger, set `trigger_checked`, and
//! finally count the fulfillment if this was the last ingredient bit.

use lib_ledger::{AssetLedger, LedgerError, NativeLedger, TokenLedger};
use lib_types::{AccountKey, Amount};
use tracing::{debug, info, warn};

use crate::checklist::{CheckPair, Checklist};
use crate::errors::{RecipeError, RecipeResult};
use crate::recipe::{GenericRecipe, Ingredient, IngredientTriggerPair, Trigger};

pub struct IngredientEngine<'a> {
    tokens: &'a dyn TokenLedger,
    assets: &'a dyn AssetLedger,
    native: &'a dyn NativeLedger,
}

impl<'a> IngredientEngine<'a> {
    pub fn new(
        tokens: &'a dyn TokenLedger,
        assets: &'a dyn AssetLedger,
        native: &'a dyn NativeLedger,
    ) -> Self {
        Self {
            tokens,
            assets,
            native,
        }
    }

    /// Deposit one asset into recipe custody. The asset fills the first
    /// unchecked slot naming it directly or naming its collection.
    pub fn deposit_asset(
        &self,
        recipe: &mut GenericRecipe,
        checklist: &mut Checklist,
        recipe_address: &AccountKey,
        payer: &AccountKey,
        asset: &AccountKey,
        reversed: bool,
    ) -> RecipeResult<()> {
        ensure_direction(recipe, reversed)?;
        let output_side = reversed;
        debug!(%asset, %payer, reversed, "deposit asset");

        let collection = self.assets.collection_of(asset)?;
        let (position, (), trigger) = find_slot(
            recipe.deposit_side(reversed),
            checklist.side(output_side),
            |ingredient| match ingredient {
                Ingredient::CoreAsset(key) if key == asset => Some(()),
                Ingredient::CoreCollection(key) if *key == collection => Some(()),
                _ => None,
            },
        )?;
        self.ensure_trigger_funds(&trigger, payer, None, 0, 0)?;

        self.execute(recipe, checklist, output_side, position, trigger, payer, Some(asset), None, || {
            self.assets
                .transfer_asset(asset, payer, recipe_address)
                .map_err(Into::into)
        })
    }

    /// Withdraw one asset from recipe custody. Requires every deposit-side
    /// ingredient to be checked first.
    pub fn withdraw_asset(
        &self,
        recipe: &mut GenericRecipe,
        checklist: &mut Checklist,
        recipe_address: &AccountKey,
        payer: &AccountKey,
        asset: &AccountKey,
        reversed: bool,
    ) -> RecipeResult<()> {
        ensure_direction(recipe, reversed)?;
        ensure_deposits_finished(checklist.side(reversed))?;
        let output_side = !reversed;
        debug!(%asset, %payer, reversed, "withdraw asset");

        let collection = self.assets.collection_of(asset)?;
        let (position, (), trigger) = find_slot(
            recipe.withdraw_side(reversed),
            checklist.side(output_side),
            |ingredient| match ingredient {
                Ingredient::CoreAsset(key) if key == asset => Some(()),
                Ingredient::CoreCollection(key) if *key == collection => Some(()),
                _ => None,
            },
        )?;
        self.ensure_trigger_funds(&trigger, payer, None, 0, 0)?;

        self.execute(recipe, checklist, output_side, position, trigger, payer, Some(asset), None, || {
            self.assets
                .transfer_asset(asset, recipe_address, payer)
                .map_err(Into::into)
        })
    }

    /// Deposit the slot-declared amount of `mint` from the payer.
    pub fn deposit_token(
        &self,
        recipe: &mut GenericRecipe,
        checklist: &mut Checklist,
        recipe_address: &AccountKey,
        payer: &AccountKey,
        mint: &AccountKey,
        reversed: bool,
    ) -> RecipeResult<()> {
        ensure_direction(recipe, reversed)?;
        let output_side = reversed;
        debug!(%mint, %payer, reversed, "deposit token");

        let (position, amount, trigger) = find_slot(
            recipe.deposit_side(reversed),
            checklist.side(output_side),
            |ingredient| match ingredient {
                Ingredient::SplToken(key, amount) if key == mint => Some(*amount),
                _ => None,
            },
        )?;
        // The deposit and a TokenFee trigger draw from the same balance.
        self.ensure_trigger_funds(&trigger, payer, Some(mint), amount, 0)?;

        self.execute(recipe, checklist, output_side, position, trigger, payer, None, Some(mint), || {
            self.tokens
                .transfer(mint, payer, recipe_address, amount)
                .map_err(Into::into)
        })
    }

    /// Withdraw the slot-declared amount of `mint` from recipe custody.
    pub fn withdraw_token(
        &self,
        recipe: &mut GenericRecipe,
        checklist: &mut Checklist,
        recipe_address: &AccountKey,
        payer: &AccountKey,
        mint: &AccountKey,
        reversed: bool,
    ) -> RecipeResult<()> {
        ensure_direction(recipe, reversed)?;
        ensure_deposits_finished(checklist.side(reversed))?;
        let output_side = !reversed;
        debug!(%mint, %payer, reversed, "withdraw token");

        let (position, amount, trigger) = find_slot(
            recipe.withdraw_side(reversed),
            checklist.side(output_side),
            |ingredient| match ingredient {
                Ingredient::SplToken(key, amount) if key == mint => Some(*amount),
                _ => None,
            },
        )?;
        self.ensure_trigger_funds(&trigger, payer, Some(mint), 0, 0)?;

        self.execute(recipe, checklist, output_side, position, trigger, payer, None, Some(mint), || {
            self.tokens
                .transfer(mint, recipe_address, payer, amount)
                .map_err(Into::into)
        })
    }

    /// Deposit the slot-declared amount of native currency from the payer.
    pub fn deposit_sol(
        &self,
        recipe: &mut GenericRecipe,
        checklist: &mut Checklist,
        recipe_address: &AccountKey,
        payer: &AccountKey,
        reversed: bool,
    ) -> RecipeResult<()> {
        ensure_direction(recipe, reversed)?;
        let output_side = reversed;
        debug!(%payer, reversed, "deposit sol");

        let (position, amount, trigger) = find_slot(
            recipe.deposit_side(reversed),
            checklist.side(output_side),
            |ingredient| match ingredient {
                Ingredient::Sol(amount) => Some(*amount),
                _ => None,
            },
        )?;
        self.ensure_trigger_funds(&trigger, payer, None, 0, amount)?;

        self.execute(recipe, checklist, output_side, position, trigger, payer, None, None, || {
            self.native
                .transfer_native(payer, recipe_address, amount)
                .map_err(Into::into)
        })
    }

    /// Withdraw the slot-declared amount of native currency from custody.
    pub fn withdraw_sol(
        &self,
        recipe: &mut GenericRecipe,
        checklist: &mut Checklist,
        recipe_address: &AccountKey,
        payer: &AccountKey,
        reversed: bool,
    ) -> RecipeResult<()> {
        ensure_direction(recipe, reversed)?;
        ensure_deposits_finished(checklist.side(reversed))?;
        let output_side = !reversed;
        debug!(%payer, reversed, "withdraw sol");

        let (position, amount, trigger) = find_slot(
            recipe.withdraw_side(reversed),
            checklist.side(output_side),
            |ingredient| match ingredient {
                Ingredient::Sol(amount) => Some(*amount),
                _ => None,
            },
        )?;
        self.ensure_trigger_funds(&trigger, payer, None, 0, 0)?;

        self.execute(recipe, checklist, output_side, position, trigger, payer, None, None, || {
            self.native
                .transfer_native(recipe_address, payer, amount)
                .map_err(Into::into)
        })
    }

    /// Shared tail of every operation. `next_count` is resolved before the
    /// ingredient moves so counter overflow aborts with nothing touched.
    #[allow(clippy::too_many_arguments)]
    fn execute(
        &self,
        recipe: &mut GenericRecipe,
        checklist: &mut Checklist,
        output_side: bool,
        position: usize,
        trigger: Trigger,
        payer: &AccountKey,
        asset: Option<&AccountKey>,
        slot_mint: Option<&AccountKey>,
        move_ingredient: impl FnOnce() -> RecipeResult<()>,
    ) -> RecipeResult<()> {
        let next_count = if checklist.complete_after(output_side, position) {
            Some(
                recipe
                    .count
                    .checked_add(1)
                    .ok_or(RecipeError::NumericalOverflow)?,
            )
        } else {
            None
        };

        move_ingredient()?;
        checklist.side_mut(output_side)[position].ingredient_checked = true;
        self.fire_trigger(&trigger, payer, asset, slot_mint)?;
        checklist.side_mut(output_side)[position].trigger_checked = true;

        if let Some(next) = next_count {
            recipe.count = next;
            info!(count = next, "recipe fulfilled");
        }
        Ok(())
    }

    /// Triggers draw from the payer even on withdrawals. Fee coverage is
    /// validated here, before the ingredient moves, together with any
    /// ingredient amount the payer supplies from the same balance.
    fn ensure_trigger_funds(
        &self,
        trigger: &Trigger,
        payer: &AccountKey,
        slot_mint: Option<&AccountKey>,
        base_token: Amount,
        base_native: Amount,
    ) -> RecipeResult<()> {
        let mut token_need = base_token;
        let mut native_need = base_native;
        match trigger {
            Trigger::SolFee { amount, .. } => {
                native_need = native_need
                    .checked_add(*amount)
                    .ok_or(RecipeError::NumericalOverflow)?;
            }
            Trigger::TokenFee { amount, .. } if slot_mint.is_some() => {
                token_need = token_need
                    .checked_add(*amount)
                    .ok_or(RecipeError::NumericalOverflow)?;
            }
            _ => {}
        }

        if token_need > 0 {
            if let Some(mint) = slot_mint {
                let have = self.tokens.balance(mint, payer)?;
                if have < token_need {
                    return Err(LedgerError::InsufficientBalance {
                        have,
                        need: token_need,
                    }
                    .into());
                }
            }
        }
        if native_need > 0 {
            let have = self.native.native_balance(payer)?;
            if have < native_need {
                return Err(LedgerError::InsufficientNative {
                    have,
                    need: native_need,
                }
                .into());
            }
        }
        Ok(())
    }

    fn fire_trigger(
        &self,
        trigger: &Trigger,
        payer: &AccountKey,
        asset: Option<&AccountKey>,
        slot_mint: Option<&AccountKey>,
    ) -> RecipeResult<()> {
        match trigger {
            Trigger::None => Ok(()),
            Trigger::Rename { name, uri, .. } => match asset {
                Some(asset) => self
                    .assets
                    .set_metadata(asset, name.clone(), uri.clone())
                    .map_err(Into::into),
                None => {
                    debug!("rename trigger on a slot without an asset, skipping");
                    Ok(())
                }
            },
            Trigger::SolFee {
                amount,
                fee_account,
            } => self
                .native
                .transfer_native(payer, fee_account, *amount)
                .map_err(Into::into),
            Trigger::TokenFee {
                amount,
                fee_account,
                ..
            } => match slot_mint {
                Some(mint) => self
                    .tokens
                    .transfer(mint, payer, fee_account, *amount)
                    .map_err(Into::into),
                None => {
                    warn!("token fee trigger on a slot without a mint, skipping");
                    Ok(())
                }
            },
        }
    }
}

fn ensure_direction(recipe: &GenericRecipe, reversed: bool) -> RecipeResult<()> {
    if reversed && !recipe.reversible {
        return Err(RecipeError::NotReversible);
    }
    Ok(())
}

fn ensure_deposits_finished(checks: &[CheckPair]) -> RecipeResult<()> {
    if checks.iter().any(|pair| !pair.ingredient_checked) {
        return Err(RecipeError::MissingInputDeposit);
    }
    Ok(())
}

/// First unchecked slot the matcher accepts, with its extracted value and
/// a copy of its trigger.
fn find_slot<T>(
    pairs: &[IngredientTriggerPair],
    checks: &[CheckPair],
    mut matcher: impl FnMut(&Ingredient) -> Option<T>,
) -> RecipeResult<(usize, T, Trigger)> {
    pairs
        .iter()
        .zip(checks.iter())
        .enumerate()
        .find_map(|(i, (pair, check))| {
            if check.ingredient_checked {
                return None;
            }
            matcher(&pair.ingredient).map(|value| (i, value, pair.trigger.clone()))
        })
        .ok_or(RecipeError::InvalidIngredient)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib_ledger::MemoryLedger;

    fn key(tag: u8) -> AccountKey {
        AccountKey::new([tag; 32])
    }

    const COLLECTION: u8 = 2;
    const TOKEN: u8 = 3;
    const FEES: u8 = 4;
    const ASSET: u8 = 5;
    const PAYER: u8 = 6;
    const RECIPE: u8 = 7;

    /// Inputs: one asset from the collection (with a native fee), 100
    /// tokens. Output: 400 tokens back.
    fn recipe(reversible: bool) -> GenericRecipe {
        GenericRecipe::new(
            key(1),
            reversible,
            255,
            vec![
                IngredientTriggerPair {
                    ingredient: Ingredient::CoreCollection(key(COLLECTION)),
                    trigger: Trigger::SolFee {
                        amount: 5,
                        fee_account: key(FEES),
                    },
                },
                IngredientTriggerPair {
                    ingredient: Ingredient::SplToken(key(TOKEN), 100),
                    trigger: Trigger::None,
                },
            ],
            vec![IngredientTriggerPair {
                ingredient: Ingredient::SplToken(key(TOKEN), 400),
                trigger: Trigger::None,
            }],
        )
    }

    fn ledger(asset_owner: u8) -> MemoryLedger {
        let ledger = MemoryLedger::new();
        ledger.insert_collection(key(COLLECTION), key(1));
        ledger.register_mint(key(TOKEN));
        ledger.insert_asset(key(ASSET), key(COLLECTION), key(asset_owner), "A", "u/");
        ledger.mint_to(key(TOKEN), key(PAYER), 1000);
        ledger.mint_to(key(TOKEN), key(RECIPE), 500);
        ledger.fund_native(key(PAYER), 50);
        ledger
    }

    #[test]
    fn test_deposit_asset_checks_slot_and_fires_fee() {
        let ledger = ledger(PAYER);
        let mut recipe = recipe(false);
        let mut checklist = Checklist::for_recipe(&recipe, 254);
        let engine = IngredientEngine::new(&ledger, &ledger, &ledger);

        engine
            .deposit_asset(&mut recipe, &mut checklist, &key(RECIPE), &key(PAYER), &key(ASSET), false)
            .unwrap();

        assert_eq!(ledger.asset_owner(&key(ASSET)), Some(key(RECIPE)));
        assert!(checklist.inputs[0].ingredient_checked);
        assert!(checklist.inputs[0].trigger_checked);
        // 50 - 5 native fee
        assert_eq!(ledger.native_balance_of(&key(PAYER)), 45);
        assert_eq!(ledger.native_balance_of(&key(FEES)), 5);
        // Not fulfilled yet
        assert_eq!(recipe.count, 0);
    }

    #[test]
    fn test_repeat_deposit_finds_no_unchecked_slot() {
        let ledger = ledger(PAYER);
        ledger.insert_asset(key(10), key(COLLECTION), key(PAYER), "B", "u/");
        let mut recipe = recipe(false);
        let mut checklist = Checklist::for_recipe(&recipe, 254);
        let engine = IngredientEngine::new(&ledger, &ledger, &ledger);

        engine
            .deposit_asset(&mut recipe, &mut checklist, &key(RECIPE), &key(PAYER), &key(ASSET), false)
            .unwrap();
        let result = engine.deposit_asset(
            &mut recipe,
            &mut checklist,
            &key(RECIPE),
            &key(PAYER),
            &key(10),
            false,
        );

        assert_eq!(result, Err(RecipeError::InvalidIngredient));
        // The second asset never moved.
        assert_eq!(ledger.asset_owner(&key(10)), Some(key(PAYER)));
    }

    #[test]
    fn test_deposit_token_matches_mint_slot() {
        let ledger = ledger(PAYER);
        let mut recipe = recipe(false);
        let mut checklist = Checklist::for_recipe(&recipe, 254);
        let engine = IngredientEngine::new(&ledger, &ledger, &ledger);

        engine
            .deposit_token(&mut recipe, &mut checklist, &key(RECIPE), &key(PAYER), &key(TOKEN), false)
            .unwrap();

        assert_eq!(ledger.token_balance(&key(TOKEN), &key(PAYER)), 900);
        assert_eq!(ledger.token_balance(&key(TOKEN), &key(RECIPE)), 600);
        assert!(checklist.inputs[1].ingredient_checked);
    }

    #[test]
    fn test_withdraw_gated_on_finished_deposits() {
        let ledger = ledger(PAYER);
        let mut recipe = recipe(false);
        let mut checklist = Checklist::for_recipe(&recipe, 254);
        let engine = IngredientEngine::new(&ledger, &ledger, &ledger);

        let result = engine.withdraw_token(
            &mut recipe,
            &mut checklist,
            &key(RECIPE),
            &key(PAYER),
            &key(TOKEN),
            false,
        );
        assert_eq!(result, Err(RecipeError::MissingInputDeposit));
        assert_eq!(ledger.token_balance(&key(TOKEN), &key(RECIPE)), 500);
    }

    #[test]
    fn test_full_round_trip_counts_one_fulfillment() {
        let ledger = ledger(PAYER);
        let mut recipe = recipe(false);
        let mut checklist = Checklist::for_recipe(&recipe, 254);
        let engine = IngredientEngine::new(&ledger, &ledger, &ledger);

        engine
            .deposit_asset(&mut recipe, &mut checklist, &key(RECIPE), &key(PAYER), &key(ASSET), false)
            .unwrap();
        engine
            .deposit_token(&mut recipe, &mut checklist, &key(RECIPE), &key(PAYER), &key(TOKEN), false)
            .unwrap();
        assert_eq!(recipe.count, 0);

        engine
            .withdraw_token(&mut recipe, &mut checklist, &key(RECIPE), &key(PAYER), &key(TOKEN), false)
            .unwrap();

        assert!(checklist.is_complete());
        assert_eq!(recipe.count, 1);
        // 1000 - 100 deposited + 400 withdrawn
        assert_eq!(ledger.token_balance(&key(TOKEN), &key(PAYER)), 1300);
        assert_eq!(ledger.token_balance(&key(TOKEN), &key(RECIPE)), 200);

        // Every slot is checked; nothing further can run.
        let result = engine.withdraw_token(
            &mut recipe,
            &mut checklist,
            &key(RECIPE),
            &key(PAYER),
            &key(TOKEN),
            false,
        );
        assert_eq!(result, Err(RecipeError::InvalidIngredient));
        assert_eq!(recipe.count, 1);
    }

    #[test]
    fn test_reversed_requires_reversible() {
        let ledger = ledger(PAYER);
        let mut recipe = recipe(false);
        let mut checklist = Checklist::for_recipe(&recipe, 254);
        let engine = IngredientEngine::new(&ledger, &ledger, &ledger);

        let result = engine.deposit_token(
            &mut recipe,
            &mut checklist,
            &key(RECIPE),
            &key(PAYER),
            &key(TOKEN),
            true,
        );
        assert_eq!(result, Err(RecipeError::NotReversible));
    }

    #[test]
    fn test_reversed_round_trip_on_reversible_recipe() {
        // Asset starts in custody; the payer runs the recipe backwards.
        let ledger = ledger(RECIPE);
        let mut recipe = recipe(true);
        let mut checklist = Checklist::for_recipe(&recipe, 254);
        let engine = IngredientEngine::new(&ledger, &ledger, &ledger);

        // Reversed deposit fills the output side (400 tokens in).
        engine
            .deposit_token(&mut recipe, &mut checklist, &key(RECIPE), &key(PAYER), &key(TOKEN), true)
            .unwrap();
        assert!(checklist.outputs[0].ingredient_checked);
        assert_eq!(ledger.token_balance(&key(TOKEN), &key(PAYER)), 600);

        // Reversed withdrawals drain the input side.
        engine
            .withdraw_asset(&mut recipe, &mut checklist, &key(RECIPE), &key(PAYER), &key(ASSET), true)
            .unwrap();
        assert_eq!(ledger.asset_owner(&key(ASSET)), Some(key(PAYER)));
        // The input slot's native fee still charges the payer.
        assert_eq!(ledger.native_balance_of(&key(FEES)), 5);

        engine
            .withdraw_token(&mut recipe, &mut checklist, &key(RECIPE), &key(PAYER), &key(TOKEN), true)
            .unwrap();

        assert!(checklist.is_complete());
        assert_eq!(recipe.count, 1);
        // 1000 - 400 in + 100 out
        assert_eq!(ledger.token_balance(&key(TOKEN), &key(PAYER)), 700);
    }

    #[test]
    fn test_token_fee_trigger_charges_slot_mint() {
        let ledger = ledger(PAYER);
        let mut recipe = GenericRecipe::new(
            key(1),
            false,
            255,
            vec![IngredientTriggerPair {
                ingredient: Ingredient::SplToken(key(TOKEN), 100),
                trigger: Trigger::TokenFee {
                    amount: 10,
                    fee_account: key(FEES),
                    fee_token_account: key(9),
                },
            }],
            vec![],
        );
        let mut checklist = Checklist::for_recipe(&recipe, 254);
        let engine = IngredientEngine::new(&ledger, &ledger, &ledger);

        engine
            .deposit_token(&mut recipe, &mut checklist, &key(RECIPE), &key(PAYER), &key(TOKEN), false)
            .unwrap();

        assert_eq!(ledger.token_balance(&key(TOKEN), &key(PAYER)), 890);
        assert_eq!(ledger.token_balance(&key(TOKEN), &key(RECIPE)), 600);
        assert_eq!(ledger.token_balance(&key(TOKEN), &key(FEES)), 10);
        // Empty output side: the single deposit fulfills the recipe.
        assert_eq!(recipe.count, 1);
    }

    #[test]
    fn test_trigger_funds_checked_before_the_ingredient_moves() {
        let ledger = MemoryLedger::new();
        ledger.register_mint(key(TOKEN));
        ledger.mint_to(key(TOKEN), key(PAYER), 105); // covers 100, not 100 + 10
        let mut recipe = GenericRecipe::new(
            key(1),
            false,
            255,
            vec![IngredientTriggerPair {
                ingredient: Ingredient::SplToken(key(TOKEN), 100),
                trigger: Trigger::TokenFee {
                    amount: 10,
                    fee_account: key(FEES),
                    fee_token_account: key(9),
                },
            }],
            vec![],
        );
        let mut checklist = Checklist::for_recipe(&recipe, 254);
        let engine = IngredientEngine::new(&ledger, &ledger, &ledger);

        let result = engine.deposit_token(
            &mut recipe,
            &mut checklist,
            &key(RECIPE),
            &key(PAYER),
            &key(TOKEN),
            false,
        );
        assert_eq!(
            result,
            Err(RecipeError::Ledger(LedgerError::InsufficientBalance {
                have: 105,
                need: 110,
            }))
        );
        // Nothing moved and the slot stayed unchecked.
        assert_eq!(ledger.token_balance(&key(TOKEN), &key(PAYER)), 105);
        assert!(!checklist.inputs[0].ingredient_checked);
        assert_eq!(recipe.count, 0);
    }

    #[test]
    fn test_rename_trigger_rewrites_deposited_asset() {
        let ledger = ledger(PAYER);
        let mut recipe = GenericRecipe::new(
            key(1),
            false,
            255,
            vec![IngredientTriggerPair {
                ingredient: Ingredient::CoreAsset(key(ASSET)),
                trigger: Trigger::Rename {
                    name: "Forged".to_string(),
                    uri: "https://example.com/forged.json".to_string(),
                    max: 0,
                    min: 0,
                },
            }],
            vec![],
        );
        let mut checklist = Checklist::for_recipe(&recipe, 254);
        let engine = IngredientEngine::new(&ledger, &ledger, &ledger);

        engine
            .deposit_asset(&mut recipe, &mut checklist, &key(RECIPE), &key(PAYER), &key(ASSET), false)
            .unwrap();

        assert_eq!(ledger.asset_name(&key(ASSET)).unwrap(), "Forged");
        assert_eq!(
            ledger.asset_uri(&key(ASSET)).unwrap(),
            "https://example.com/forged.json"
        );
    }

    #[test]
    fn test_deposit_sol_fills_native_slot() {
        let ledger = ledger(PAYER);
        let mut recipe = GenericRecipe::new(
            key(1),
            false,
            255,
            vec![IngredientTriggerPair {
                ingredient: Ingredient::Sol(25),
                trigger: Trigger::None,
            }],
            vec![],
        );
        let mut checklist = Checklist::for_recipe(&recipe, 254);
        let engine = IngredientEngine::new(&ledger, &ledger, &ledger);

        engine
            .deposit_sol(&mut recipe, &mut checklist, &key(RECIPE), &key(PAYER), false)
            .unwrap();

        assert_eq!(ledger.native_balance_of(&key(PAYER)), 25);
        assert_eq!(ledger.native_balance_of(&key(RECIPE)), 25);
        assert_eq!(recipe.count, 1);
    }

    #[test]
    fn test_checklist_creation_never_touches_the_counter() {
        let recipe = recipe(false);
        let _ = Checklist::for_recipe(&recipe, 254);
        let _ = Checklist::for_recipe(&recipe, 254);
        assert_eq!(recipe.count, 0);
    }
}
