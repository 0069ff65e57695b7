use std::{
    fs,
    path::{Path, PathBuf},
};

use log::*;
use serde::Serialize;
use tempfile::TempDir;

/// Mirrors the layout the build toolchain produces: `<dir>/target/deploy`.
pub struct DeployDir {
    // Held so the directory is removed once the test is done
    _root: TempDir,
    deploy: PathBuf,
}

impl DeployDir {
    pub fn new() -> Self {
        let root = tempfile::tempdir()
            .expect("failed to create temporary directory");
        let deploy = root.path().join("target").join("deploy");
        fs::create_dir_all(&deploy).expect("failed to create deploy dir");
        Self {
            _root: root,
            deploy,
        }
    }

    pub fn path(&self) -> &Path {
        &self.deploy
    }

    /// Writes `entries` as a JSON array into `<deploy>/<file_name>`.
    pub fn write_keypair<T: Serialize>(
        &self,
        file_name: &str,
        entries: &[T],
    ) -> PathBuf {
        let json = serde_json::to_string(entries)
            .expect("failed to serialize keypair entries");
        self.write_raw(file_name, &json)
    }

    /// Writes `contents` verbatim, used for malformed inputs.
    pub fn write_raw(&self, file_name: &str, contents: &str) -> PathBuf {
        let path = self.deploy.join(file_name);
        fs::write(&path, contents).expect("failed to write keypair file");
        debug!("Wrote test keypair file '{}'", path.display());
        path
    }
}

impl Default for DeployDir {
    fn default() -> Self {
        Self::new()
    }
}

/// A 64 entry keypair whose entries are `seed, seed + 1, ...` wrapping at 256.
pub fn sequential_keypair(seed: u8) -> Vec<u8> {
    (0..64u16).map(|i| seed.wrapping_add(i as u8)).collect()
}
