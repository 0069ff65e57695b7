use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use log::*;
use program_id_config::{KeySlice, PUBKEY_BYTES};
use serde::{de, Deserialize, Deserializer};
use serde_json::Number;

use crate::errors::{ProgramIdError, ProgramIdResult};

/// Entries in a complete keypair, secret half followed by public half.
pub const FULL_KEYPAIR_LEN: usize = 2 * PUBKEY_BYTES;

// -----------------
// KeypairEntry
// -----------------
/// An integer entry kept as written, so values of any size survive parsing
/// and can be reported as out of range.
#[derive(Debug, Clone, PartialEq, Eq)]
struct KeypairEntry(Number);

impl KeypairEntry {
    fn to_byte(&self) -> Option<u8> {
        self.0.as_i64().and_then(|value| u8::try_from(value).ok())
    }
}

impl<'de> Deserialize<'de> for KeypairEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let number = Number::deserialize(deserializer)?;
        let text = number.to_string();
        let digits = text.strip_prefix('-').unwrap_or(&text);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(de::Error::custom(format!(
                "expected an integer, found {text}"
            )));
        }
        Ok(Self(number))
    }
}

impl fmt::Display for KeypairEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// -----------------
// KeypairRecord
// -----------------
/// The JSON array of a keypair file as read from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypairRecord {
    path: PathBuf,
    entries: Vec<KeypairEntry>,
}

impl KeypairRecord {
    pub fn read_from_file(path: &Path) -> ProgramIdResult<Self> {
        let json = fs::read(path).map_err(|source| ProgramIdError::NotFound {
            path: path.to_path_buf(),
            source,
        })?;
        trace!("Read {} bytes from '{}'", json.len(), path.display());
        Self::from_json_slice(path, &json)
    }

    /// Parses `json` which was loaded from `path`, the latter is only used to
    /// provide context in errors.
    pub fn from_json_slice(
        path: impl Into<PathBuf>,
        json: &[u8],
    ) -> ProgramIdResult<Self> {
        let path = path.into();
        match serde_json::from_slice::<Vec<KeypairEntry>>(json) {
            Ok(entries) => Ok(Self { path, entries }),
            Err(source) => Err(ProgramIdError::Parse { path, source }),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Extracts the 32 bytes selected by `slice`.
    /// The length is checked before the range of the selected entries.
    /// Entries outside of the slice are never inspected.
    pub fn public_key_bytes(
        &self,
        slice: KeySlice,
    ) -> ProgramIdResult<[u8; PUBKEY_BYTES]> {
        let required = slice.required_len();
        if self.entries.len() < required {
            return Err(ProgramIdError::InsufficientData {
                path: self.path.clone(),
                actual: self.entries.len(),
                required,
            });
        }
        if slice == KeySlice::Head && self.entries.len() < FULL_KEYPAIR_LEN {
            warn!(
                "Keypair file '{}' holds only {} of {} entries",
                self.path.display(),
                self.entries.len(),
                FULL_KEYPAIR_LEN
            );
        }

        let mut bytes = [0u8; PUBKEY_BYTES];
        for (byte, index) in bytes.iter_mut().zip(slice.range()) {
            let entry = &self.entries[index];
            *byte = entry.to_byte().ok_or_else(|| ProgramIdError::Range {
                path: self.path.clone(),
                index,
                value: entry.to_string(),
            })?;
        }
        Ok(bytes)
    }
}
