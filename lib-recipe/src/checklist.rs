//! Fulfillment Checklist
//!
//! One checklist exists per (recipe, payer). Each slot carries two flags
//! that only ever go from false to true: `ingredient_checked` when the
//! slot's asset/token side has moved, `trigger_checked` when its trigger
//! has fired. Slots whose ingredient or trigger is `None` start checked.

use serde::{Deserialize, Serialize};

use crate::recipe::GenericRecipe;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckPair {
    pub ingredient_checked: bool,
    pub trigger_checked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checklist {
    pub bump: u8,
    pub inputs: Vec<CheckPair>,
    pub outputs: Vec<CheckPair>,
}

impl Checklist {
    pub const BASE_SIZE: usize = 8 + 1 + 4 + 4;

    /// Create the checklist for a recipe, pre-checking every `None` slot.
    pub fn for_recipe(recipe: &GenericRecipe, bump: u8) -> Self {
        let seed = |pairs: &[crate::recipe::IngredientTriggerPair]| {
            pairs
                .iter()
                .map(|pair| CheckPair {
                    ingredient_checked: pair.ingredient.is_none(),
                    trigger_checked: pair.trigger.is_none(),
                })
                .collect()
        };
        Self {
            bump,
            inputs: seed(&recipe.inputs),
            outputs: seed(&recipe.outputs),
        }
    }

    /// The recipe is fulfilled for this payer once every ingredient bit on
    /// both sides is set.
    pub fn is_complete(&self) -> bool {
        self.inputs.iter().all(|pair| pair.ingredient_checked)
            && self.outputs.iter().all(|pair| pair.ingredient_checked)
    }

    /// Would checking the ingredient bit at `position` on the given side
    /// complete the checklist?
    pub(crate) fn complete_after(&self, output_side: bool, position: usize) -> bool {
        let done = |pairs: &[CheckPair], skipped: Option<usize>| {
            pairs
                .iter()
                .enumerate()
                .all(|(i, pair)| pair.ingredient_checked || Some(i) == skipped)
        };
        if output_side {
            done(&self.inputs, None) && done(&self.outputs, Some(position))
        } else {
            done(&self.inputs, Some(position)) && done(&self.outputs, None)
        }
    }

    pub(crate) fn side(&self, output_side: bool) -> &[CheckPair] {
        if output_side {
            &self.outputs
        } else {
            &self.inputs
        }
    }

    pub(crate) fn side_mut(&mut self, output_side: bool) -> &mut [CheckPair] {
        if output_side {
            &mut self.outputs
        } else {
            &mut self.inputs
        }
    }

    pub fn storage_size(&self) -> usize {
        Self::BASE_SIZE + 2 * self.inputs.len() + 2 * self.outputs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::{Ingredient, IngredientTriggerPair, Trigger};
    use lib_types::AccountKey;

    fn key(tag: u8) -> AccountKey {
        AccountKey::new([tag; 32])
    }

    fn recipe() -> GenericRecipe {
        GenericRecipe::new(
            key(1),
            false,
            255,
            vec![
                IngredientTriggerPair {
                    ingredient: Ingredient::CoreCollection(key(2)),
                    trigger: Trigger::SolFee {
                        amount: 5,
                        fee_account: key(4),
                    },
                },
                IngredientTriggerPair {
                    ingredient: Ingredient::None,
                    trigger: Trigger::None,
                },
            ],
            vec![IngredientTriggerPair {
                ingredient: Ingredient::SplToken(key(3), 100),
                trigger: Trigger::None,
            }],
        )
    }

    #[test]
    fn test_none_slots_start_checked() {
        let checklist = Checklist::for_recipe(&recipe(), 254);
        assert!(!checklist.inputs[0].ingredient_checked);
        assert!(!checklist.inputs[0].trigger_checked);
        assert!(checklist.inputs[1].ingredient_checked);
        assert!(checklist.inputs[1].trigger_checked);
        assert!(!checklist.outputs[0].ingredient_checked);
        assert!(checklist.outputs[0].trigger_checked);
        assert!(!checklist.is_complete());
    }

    #[test]
    fn test_completion_requires_both_sides() {
        let mut checklist = Checklist::for_recipe(&recipe(), 254);
        checklist.inputs[0].ingredient_checked = true;
        assert!(!checklist.is_complete());
        assert!(checklist.complete_after(true, 0));

        checklist.outputs[0].ingredient_checked = true;
        assert!(checklist.is_complete());
    }

    #[test]
    fn test_complete_after_only_counts_the_flipped_slot() {
        let checklist = Checklist::for_recipe(&recipe(), 254);
        // Flipping the output bit alone leaves inputs[0] unchecked.
        assert!(!checklist.complete_after(true, 0));
        assert!(!checklist.complete_after(false, 0));
    }

    #[test]
    fn test_storage_size_tracks_slot_counts() {
        let checklist = Checklist::for_recipe(&recipe(), 254);
        assert_eq!(checklist.storage_size(), Checklist::BASE_SIZE + 2 * 2 + 2);
    }
}
