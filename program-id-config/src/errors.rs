use thiserror::Error;

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Config path error: {0}")]
    ConfigPathInvalid(String),

    #[error("Keypair path '{0}' is not valid unicode once resolved")]
    KeypairPathInvalidUnicode(String),

    #[error("Failed to parse '{0}' env var value '{1}': {2}")]
    InvalidEnvVar(&'static str, String, String),
}
