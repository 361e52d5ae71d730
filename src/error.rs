use crate::oracle::OracleError;
use thiserror::Error;

#[allow(dead_code)]
#[derive(Error, Debug)]
pub enum EcoscoreError {
    #[error("assessment file not found: {0}")]
    AssessmentNotFound(String),

    #[error("assessment parse error: {0}")]
    AssessmentParse(String),

    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("oracle credential missing: set the {0} environment variable")]
    MissingCredential(String),

    #[error("report rendering error: {0}")]
    Report(String),

    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, EcoscoreError>;
