use std::path::{Path, PathBuf};

/// Root of the cargo workspace, i.e. the parent of this crate's manifest dir.
pub fn cargo_workspace_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("test-tools-core should live inside the workspace")
        .to_path_buf()
}
