pub mod diagnostics;
pub mod keypair_files;
pub mod paths;
