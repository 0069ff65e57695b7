use std::ops::Range;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Length of a public key and thus of every program id.
pub const PUBKEY_BYTES: usize = 32;

// -----------------
// KeySlice
// -----------------
/// Which 32 entries of a keypair record hold the program key.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Deserialize,
    Serialize,
    EnumString,
    Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum KeySlice {
    /// Entries `0..32`.
    #[default]
    Head,
    /// Entries `32..64`, the public half of a full 64 entry keypair.
    Tail,
}

impl KeySlice {
    pub fn range(&self) -> Range<usize> {
        match self {
            KeySlice::Head => 0..PUBKEY_BYTES,
            KeySlice::Tail => PUBKEY_BYTES..2 * PUBKEY_BYTES,
        }
    }

    /// Minimum number of entries a record needs for this slice.
    pub fn required_len(&self) -> usize {
        self.range().end
    }
}
