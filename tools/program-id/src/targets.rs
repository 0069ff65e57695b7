use std::path::{Path, PathBuf};

use log::*;
use program_id_config::{
    KeySlice, ProgramIdConfig, ProgramKeypairConfig, DEFAULT_KEYPAIR_PATH,
};

use crate::{
    decode_program_id, errors::ProgramIdResult, find_keypair_files,
    DecodedProgramId,
};

// -----------------
// KeypairTarget
// -----------------
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypairTarget {
    pub path: PathBuf,
    pub expected_id: Option<String>,
}

impl KeypairTarget {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            expected_id: None,
        }
    }
}

impl From<&ProgramKeypairConfig> for KeypairTarget {
    fn from(config: &ProgramKeypairConfig) -> Self {
        Self {
            path: PathBuf::from(&config.keypair),
            expected_id: config.expected_id.clone(),
        }
    }
}

/// Configured keypairs first, followed by the ones found in the deploy dir.
/// Falls back to [DEFAULT_KEYPAIR_PATH] when neither is configured.
pub fn resolve_targets(
    config: &ProgramIdConfig,
) -> ProgramIdResult<Vec<KeypairTarget>> {
    let mut targets = config
        .programs
        .iter()
        .map(KeypairTarget::from)
        .collect::<Vec<_>>();
    if let Some(deploy_dir) = &config.deploy_dir {
        let found = find_keypair_files(Path::new(deploy_dir))?;
        targets.extend(found.into_iter().map(KeypairTarget::new));
    }
    if targets.is_empty() {
        debug!("No keypair configured, using '{}'", DEFAULT_KEYPAIR_PATH);
        targets.push(KeypairTarget::new(DEFAULT_KEYPAIR_PATH));
    }
    Ok(targets)
}

/// Decodes all targets, failing on the first one that can't be decoded or
/// doesn't match its expected id.
pub fn decode_targets(
    targets: &[KeypairTarget],
    slice: KeySlice,
) -> ProgramIdResult<Vec<DecodedProgramId>> {
    targets
        .iter()
        .map(|target| {
            let decoded = decode_program_id(&target.path, slice)?;
            if let Some(expected_id) = &target.expected_id {
                decoded.verify(expected_id)?;
                info!(
                    "Program ID from '{}' matches {}",
                    target.path.display(),
                    expected_id
                );
            }
            Ok(decoded)
        })
        .collect()
}
