use crate::error::{EcoscoreError, Result};
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "ecoscore.toml";
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Deserialize)]
pub struct EcoscoreConfig {
    pub oracle: Option<OracleConfig>,
}

/// The API key itself never lives in the file; only the name of the
/// environment variable that carries it.
#[derive(Debug, Clone, Deserialize)]
pub struct OracleConfig {
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub timeout_secs: Option<u64>,
    pub api_key_env: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OracleSettings {
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
    pub api_key_env: String,
}

impl Default for OracleSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
        }
    }
}

impl EcoscoreConfig {
    pub fn oracle_settings(&self) -> OracleSettings {
        let defaults = OracleSettings::default();
        match &self.oracle {
            Some(oracle) => OracleSettings {
                base_url: oracle
                    .base_url
                    .clone()
                    .unwrap_or(defaults.base_url)
                    .trim_end_matches('/')
                    .to_string(),
                model: oracle.model.clone().unwrap_or(defaults.model),
                timeout_secs: oracle.timeout_secs.unwrap_or(defaults.timeout_secs),
                api_key_env: oracle.api_key_env.clone().unwrap_or(defaults.api_key_env),
            },
            None => defaults,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(oracle) = &self.oracle {
            if let Some(base_url) = &oracle.base_url {
                if base_url.trim().is_empty() {
                    return Err(EcoscoreError::ConfigParse(
                        "oracle.base_url must not be empty".to_string(),
                    ));
                }
            }
            if let Some(model) = &oracle.model {
                if model.trim().is_empty() {
                    return Err(EcoscoreError::ConfigParse(
                        "oracle.model must not be empty".to_string(),
                    ));
                }
            }
            if let Some(timeout_secs) = oracle.timeout_secs {
                if timeout_secs == 0 {
                    return Err(EcoscoreError::ConfigParse(
                        "oracle.timeout_secs must be greater than 0".to_string(),
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Loads the tool config. An explicitly given path must exist; otherwise
/// `ecoscore.toml` next to the assessment file is used when present.
pub fn load_config(explicit: Option<&Path>, assessment_dir: &Path) -> Result<Option<EcoscoreConfig>> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(EcoscoreError::ConfigNotFound(path.display().to_string()));
            }
            path.to_path_buf()
        }
        None => {
            let default = assessment_dir.join(DEFAULT_CONFIG_FILE);
            if !default.exists() {
                return Ok(None);
            }
            default
        }
    };

    let content = std::fs::read_to_string(&path)?;
    let cfg: EcoscoreConfig = toml::from_str(&content)
        .map_err(|e| EcoscoreError::ConfigParse(format!("{}: {}", path.display(), e)))?;
    Ok(Some(cfg))
}
