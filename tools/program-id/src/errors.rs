use std::{io, path::PathBuf};

use program_id_config::errors::ConfigError;
use thiserror::Error;

pub type ProgramIdResult<T> = std::result::Result<T, ProgramIdError>;

#[derive(Debug, Error)]
pub enum ProgramIdError {
    #[error("Failed to read keypair file '{}': {source}", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(
        "Keypair file '{}' is not a JSON array of integers: {source}",
        .path.display()
    )]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(
        "Keypair file '{}' holds {actual} entries, but at least {required} are needed",
        .path.display()
    )]
    InsufficientData {
        path: PathBuf,
        actual: usize,
        required: usize,
    },

    #[error(
        "Keypair file '{}' has value {value} at index {index} which is not a byte (0-255)",
        .path.display()
    )]
    Range {
        path: PathBuf,
        index: usize,
        value: String,
    },

    #[error(
        "Program ID from '{}' is {actual}, but {expected} was expected",
        .path.display()
    )]
    ProgramIdMismatch {
        path: PathBuf,
        expected: String,
        actual: String,
    },

    #[error("Invalid program ID '{0}': {1}")]
    InvalidExpectedProgramId(String, String),

    #[error("Failed to list deploy dir '{}': {source}", .path.display())]
    DeployDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("No '*-keypair.json' files found in deploy dir '{}'", .0.display())]
    NoKeypairFiles(PathBuf),

    #[error(
        "An expected program ID requires exactly one keypair file, got {0}"
    )]
    ExpectRequiresSingleKeypair(usize),

    #[error("Failed to write program ID: {0}")]
    Output(#[source] io::Error),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}
