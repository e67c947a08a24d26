//! Path Flags
//!
//! A `u16` bitmask of independent, combinable swap behaviors. Bit positions
//! are part of the stored record format; construction never
//! rejects a combination — the consuming engine enforces behavioral
//! contradictions (blocking flags abort before any transfer).

use serde::{Deserialize, Serialize};

use lib_types::FlagBits;

/// Named swap behaviors.
///
/// `RerollMetadata` is a client-side alias, not a protocol bit: rerolling on
/// capture is the *default*, encoded by the absence of `NoRerollMetadata`.
/// [`PathFlags::from_features`] packs `1 << index` for every protocol
/// feature and skips the alias, so callers naming the default get the
/// default instead of a dead bit the engine would never read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PathFeature {
    /// Leave asset metadata untouched on capture
    NoRerollMetadata = 0,
    /// Reject capture instructions outright
    BlockCapture = 1,
    /// Reject release instructions outright
    BlockRelease = 2,
    /// Burn the swap amount on capture instead of crediting custody
    BurnOnCapture = 3,
    /// Burn the swap amount on release instead of crediting the payer
    BurnOnRelease = 4,
    /// Alternate reroll strategy; reserves extra per-asset counter storage
    RerollMetadataV2 = 5,
    /// Client alias for the default reroll-on-capture behavior (synthetic,
    /// excluded from the packed value)
    RerollMetadata = 16,
}

/// Bitmask of [`PathFeature`] toggles attached to a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PathFlags(FlagBits);

impl PathFlags {
    /// Empty flag set: reroll on capture, nothing blocked, nothing burned
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Wrap a raw bit pattern (wire value)
    pub const fn from_bits(bits: FlagBits) -> Self {
        Self(bits)
    }

    /// The raw bit pattern (wire value)
    pub const fn bits(self) -> FlagBits {
        self.0
    }

    /// Pack a list of features into a bitmask. The `RerollMetadata` alias is
    /// skipped: it names default behavior the protocol does not encode.
    pub fn from_features(features: &[PathFeature]) -> Self {
        let mut bits: FlagBits = 0;
        for feature in features {
            if *feature != PathFeature::RerollMetadata {
                bits |= 1 << (*feature as u16);
            }
        }
        Self(bits)
    }

    /// Test a protocol bit. The `RerollMetadata` alias is never set; use
    /// [`PathFlags::rerolls_on_capture`] for the behavior it names.
    pub fn test(self, feature: PathFeature) -> bool {
        if feature == PathFeature::RerollMetadata {
            return false;
        }
        self.0 & (1 << (feature as u16)) != 0
    }

    /// Whether capture rewrites the transferred asset's metadata
    pub fn rerolls_on_capture(self) -> bool {
        !self.test(PathFeature::NoRerollMetadata)
    }
}
