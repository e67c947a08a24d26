//! Generic recipe fulfillment.
//!
//! A [`GenericRecipe`] declares ordered input and output lists of
//! `{ingredient, trigger}` pairs. Each payer working through a recipe gets
//! a [`Checklist`] mirroring those lists; the [`IngredientEngine`] flips one
//! checklist slot per deposit or withdraw, fires the slot's trigger, and
//! counts a fulfillment when the last ingredient bit goes true.
//!
//! Reversible recipes can be run in the opposite direction (`reversed`):
//! outputs become what must be deposited and inputs become what may be
//! withdrawn, against the same checklist state.

pub mod checklist;
pub mod engine;
pub mod errors;
pub mod recipe;

pub use checklist::{CheckPair, Checklist};
pub use engine::IngredientEngine;
pub use errors::{RecipeError, RecipeResult};
pub use recipe::{GenericRecipe, Ingredient, IngredientTriggerPair, Trigger};
