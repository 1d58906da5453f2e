//! Secret loading for the spreadsheet id, API token and shared password.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::errors::ConfigError;

const ENV_SHEET_ID: &str = "QUICKSPEND_SHEET_ID";
const ENV_TOKEN: &str = "QUICKSPEND_TOKEN";
const ENV_PASSWORD: &str = "QUICKSPEND_PASSWORD";

/// Everything the app needs from the hosting environment's secret
/// store. The token is used as given; refreshing it is the credential
/// layer's concern, not ours.
#[derive(Debug, Clone)]
pub struct Secrets {
    pub spreadsheet_id: String,
    pub token: String,
    pub password: String,
}

/// On-disk shape of `secrets.json`; every field optional so the
/// environment can fill the gaps.
#[derive(Debug, Clone, Default, Deserialize)]
struct SecretsFile {
    spreadsheet_id: Option<String>,
    token: Option<String>,
    password: Option<String>,
}

impl SecretsFile {
    fn read(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }
}

impl Secrets {
    /// Loads secrets with the process environment taking precedence
    /// over `secrets.json` in the user config directory.
    pub fn load() -> Result<Self, ConfigError> {
        let file = match Self::default_path() {
            Some(path) if path.exists() => SecretsFile::read(&path)?,
            _ => SecretsFile::default(),
        };
        Self::resolve(file, |key| env::var(key).ok())
    }

    /// Loads secrets from an explicit file, ignoring the environment.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        Self::resolve(SecretsFile::read(path)?, |_| None)
    }

    /// Location of the secrets file: `<config dir>/quickspend/secrets.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("quickspend").join("secrets.json"))
    }

    fn resolve(
        file: SecretsFile,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            spreadsheet_id: env(ENV_SHEET_ID)
                .or(file.spreadsheet_id)
                .ok_or(ConfigError::Missing(ENV_SHEET_ID))?,
            token: env(ENV_TOKEN)
                .or(file.token)
                .ok_or(ConfigError::Missing(ENV_TOKEN))?,
            password: env(ENV_PASSWORD)
                .or(file.password)
                .ok_or(ConfigError::Missing(ENV_PASSWORD))?,
        })
    }
}
