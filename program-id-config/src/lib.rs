use std::{
    env, fmt, fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use errors::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

pub mod errors;
mod key_slice;
pub use key_slice::*;

/// Where the build toolchain places the keypair of the deposit program.
pub const DEFAULT_KEYPAIR_PATH: &str =
    "./target/deploy/deposit_pda-keypair.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct ProgramIdConfig {
    #[serde(default)]
    pub slice: KeySlice,
    /// Decode every `*-keypair.json` found in this directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deploy_dir: Option<String>,
    #[serde(default)]
    #[serde(rename = "program")]
    pub programs: Vec<ProgramKeypairConfig>,
}

// -----------------
// ProgramKeypairConfig
// -----------------
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct ProgramKeypairConfig {
    pub keypair: String,
    /// The id the program source declares, checked against the keypair.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_id: Option<String>,
}

impl ProgramKeypairConfig {
    pub fn new(keypair: impl Into<String>) -> Self {
        Self {
            keypair: keypair.into(),
            expected_id: None,
        }
    }
}

impl ProgramIdConfig {
    pub fn try_load_from_file(path: &str) -> ConfigResult<Self> {
        let p = Path::new(path);
        let toml = fs::read_to_string(p)?;
        Self::try_load_from_toml(&toml, Some(p))
    }

    pub fn try_load_from_toml(
        toml: &str,
        config_path: Option<&Path>,
    ) -> ConfigResult<Self> {
        let mut config: Self = toml::from_str(toml)?;
        // Relative paths are relative to the config file. Without a config
        // path they are kept as is and thus relative to the working dir.
        if let Some(config_path) = config_path {
            let config_dir = config_path.parent().ok_or_else(|| {
                ConfigError::ConfigPathInvalid(format!(
                    "Config path: '{}' is missing parent dir",
                    config_path.display()
                ))
            })?;
            for program in &mut config.programs {
                program.keypair = resolve_path(config_dir, &program.keypair)?;
            }
            if let Some(deploy_dir) = config.deploy_dir.as_mut() {
                *deploy_dir = resolve_path(config_dir, deploy_dir)?;
            }
        }
        Ok(config)
    }

    pub fn override_from_envs(&self) -> ConfigResult<ProgramIdConfig> {
        let mut config = self.clone();

        if let Ok(slice) = env::var("PROGRAM_ID_SLICE") {
            config.slice = KeySlice::from_str(&slice).map_err(|err| {
                ConfigError::InvalidEnvVar(
                    "PROGRAM_ID_SLICE",
                    slice.clone(),
                    err.to_string(),
                )
            })?;
        }

        if let Ok(keypair) = env::var("PROGRAM_ID_KEYPAIR") {
            config.programs = vec![ProgramKeypairConfig::new(keypair)];
        }

        if let Ok(deploy_dir) = env::var("PROGRAM_ID_DEPLOY_DIR") {
            config.deploy_dir = Some(deploy_dir);
        }

        Ok(config)
    }

    /// True if neither keypair files nor a deploy dir are configured.
    pub fn has_no_targets(&self) -> bool {
        self.programs.is_empty() && self.deploy_dir.is_none()
    }
}

fn resolve_path(config_dir: &Path, path: &str) -> ConfigResult<String> {
    let resolved: PathBuf = config_dir.join(path);
    resolved
        .to_str()
        .map(|s| s.to_string())
        .ok_or_else(|| ConfigError::KeypairPathInvalidUnicode(path.to_string()))
}

impl fmt::Display for ProgramIdConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let toml = toml::to_string_pretty(self)
            .unwrap_or("Invalid Config".to_string());
        write!(f, "{}", toml)
    }
}
