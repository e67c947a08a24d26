//! Recipe Engine Errors

use lib_ledger::LedgerError;
use thiserror::Error;

pub type RecipeResult<T> = Result<T, RecipeError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecipeError {
    /// No unchecked slot on the active side matches the supplied ingredient
    #[error("no matching unfilled ingredient slot")]
    InvalidIngredient,

    /// Withdrawals require every deposit-side ingredient to be checked first
    #[error("input deposits are not finished")]
    MissingInputDeposit,

    /// A reversed operation was attempted on a non-reversible recipe
    #[error("recipe is not reversible")]
    NotReversible,

    /// Fulfillment counter or fee arithmetic wrapped
    #[error("numerical overflow")]
    NumericalOverflow,

    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),
}
