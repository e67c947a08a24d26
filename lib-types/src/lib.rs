//! Shared primitives for the hybrid swap protocol core.
//! Stable, protocol-neutral, behavior-free.
//!
//! Rule: account references in protocol state are fixed-size keys, never
//! strings.

pub mod primitives;

pub use primitives::{AccountKey, Amount, FlagBits};
