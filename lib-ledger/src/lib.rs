//! External ledger collaborators for the hybrid swap protocol core.
//!
//! The swap and recipe engines never move value themselves: every custody
//! change goes through one of the traits defined here, implemented by the
//! surrounding ledger. Each trait method either applies its full effect or
//! fails without one.
//!
//! # Key Types
//!
//! - [`TokenLedger`]: fungible balance transfer/burn per mint
//! - [`AssetLedger`]: asset custody transfer, metadata rewrite, collection
//!   membership and authority queries
//! - [`NativeLedger`]: native-currency transfer
//! - [`MemoryLedger`]: in-memory implementation of all three, used by the
//!   engine test suites

pub mod errors;
pub mod memory;
pub mod traits;

pub use errors::{LedgerError, LedgerResult};
pub use memory::MemoryLedger;
pub use traits::{AssetLedger, NativeLedger, TokenLedger};
