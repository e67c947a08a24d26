//! Record Lifecycle Errors

use thiserror::Error;

/// Error during record init/update
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    #[error("Max must be greater than Min")]
    MaxMustBeGreaterThanMin,

    #[error("Path can not be set after the first swap")]
    PathCannotBeSet,

    #[error("Invalid Collection Account")]
    InvalidCollectionAccount,

    #[error("Invalid Asset Account")]
    InvalidAssetAccount,

    #[error("Asset does not belong to the declared collection")]
    InvalidCollection,

    #[error("Collection authority does not match signer")]
    InvalidCollectionAuthority,

    #[error("Mint has not been initialized")]
    MintNotInitialized,

    #[error("Record footprint {size} exceeds maximum {max}")]
    RecordTooLarge { size: usize, max: usize },

    #[error("Numerical overflow")]
    NumericalOverflow,
}

/// Result type for record lifecycle operations
pub type StateResult<T> = Result<T, StateError>;
