//! Swap execution engines.
//!
//! Two engines operate on the records defined in `lib-state`:
//!
//! - [`SwapEngine`]: capture (asset out of custody, tokens in) and release
//!   (asset into custody, tokens out), for both the v1 collection escrow
//!   and the v2 recipe + shared custody pair
//! - [`MigrationEngine`]: moves custodied token balances from a v1 escrow
//!   to a v2 shared custody account
//!
//! Both engines validate everything before mutating anything: a failed
//! operation leaves records and ledger balances exactly as they were.

pub mod config;
pub mod errors;
pub mod migrate;
pub mod swap;

pub use config::ProtocolConfig;
pub use errors::{SwapError, SwapResult};
pub use migrate::MigrationEngine;
pub use swap::SwapEngine;
