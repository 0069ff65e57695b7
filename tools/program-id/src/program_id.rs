use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use program_id_config::PUBKEY_BYTES;

use crate::errors::{ProgramIdError, ProgramIdResult};

// -----------------
// ProgramId
// -----------------
/// Public key bytes of a program, displayed as base58 (Bitcoin alphabet,
/// no checksum).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgramId([u8; PUBKEY_BYTES]);

impl ProgramId {
    pub const fn new(bytes: [u8; PUBKEY_BYTES]) -> Self {
        Self(bytes)
    }

    pub fn to_bytes(self) -> [u8; PUBKEY_BYTES] {
        self.0
    }

    pub fn as_bytes(&self) -> &[u8; PUBKEY_BYTES] {
        &self.0
    }
}

impl From<[u8; PUBKEY_BYTES]> for ProgramId {
    fn from(bytes: [u8; PUBKEY_BYTES]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for ProgramId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", bs58::encode(&self.0).into_string())
    }
}

impl FromStr for ProgramId {
    type Err = ProgramIdError;

    fn from_str(s: &str) -> ProgramIdResult<Self> {
        let invalid = |msg: String| {
            ProgramIdError::InvalidExpectedProgramId(s.into(), msg)
        };
        let decoded = bs58::decode(s)
            .into_vec()
            .map_err(|err| invalid(err.to_string()))?;
        let bytes: [u8; PUBKEY_BYTES] =
            decoded.as_slice().try_into().map_err(|_| {
                invalid(format!(
                    "decodes to {} bytes instead of {}",
                    decoded.len(),
                    PUBKEY_BYTES
                ))
            })?;
        Ok(Self(bytes))
    }
}

// -----------------
// DecodedProgramId
// -----------------
/// A program id together with the keypair file it was decoded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedProgramId {
    pub path: PathBuf,
    pub program_id: ProgramId,
}

impl DecodedProgramId {
    pub fn new(path: &Path, program_id: ProgramId) -> Self {
        Self {
            path: path.to_path_buf(),
            program_id,
        }
    }

    /// Final component of the path, or the full path if it has none.
    pub fn file_name(&self) -> String {
        match self.path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => self.path.display().to_string(),
        }
    }

    /// Fails unless the decoded id matches `expected`.
    pub fn verify(&self, expected: &str) -> ProgramIdResult<()> {
        let expected_id = ProgramId::from_str(expected)?;
        if expected_id == self.program_id {
            Ok(())
        } else {
            Err(ProgramIdError::ProgramIdMismatch {
                path: self.path.clone(),
                expected: expected.to_string(),
                actual: self.program_id.to_string(),
            })
        }
    }
}

impl fmt::Display for DecodedProgramId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Program ID from {}: {}", self.file_name(), self.program_id)
    }
}
