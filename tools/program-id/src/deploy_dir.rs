use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::*;

use crate::errors::{ProgramIdError, ProgramIdResult};

/// Suffix the build toolchain gives every program keypair it generates.
pub const KEYPAIR_FILE_SUFFIX: &str = "-keypair.json";

/// Lists the keypair files inside `deploy_dir`, sorted by file name.
pub fn find_keypair_files(deploy_dir: &Path) -> ProgramIdResult<Vec<PathBuf>> {
    let map_err = |source: io::Error| ProgramIdError::DeployDir {
        path: deploy_dir.to_path_buf(),
        source,
    };
    let mut keypairs = Vec::new();
    for entry in fs::read_dir(deploy_dir).map_err(map_err)? {
        let path = entry.map_err(map_err)?.path();
        let is_keypair = path
            .file_name()
            .and_then(|name| name.to_str())
            .map_or(false, |name| name.ends_with(KEYPAIR_FILE_SUFFIX));
        if is_keypair && path.is_file() {
            keypairs.push(path);
        } else {
            trace!("Skipping '{}'", path.display());
        }
    }
    if keypairs.is_empty() {
        return Err(ProgramIdError::NoKeypairFiles(deploy_dir.to_path_buf()));
    }
    keypairs.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    debug!(
        "Found {} keypair file(s) in '{}'",
        keypairs.len(),
        deploy_dir.display()
    );
    Ok(keypairs)
}
