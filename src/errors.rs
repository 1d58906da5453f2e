use thiserror::Error;

/// Error type that captures failures talking to the spreadsheet service.
#[derive(Debug, Error)]
pub enum SheetError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Sheet API error: {0}")]
    Api(String),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Missing column `{0}` in entry sheet header")]
    MissingColumn(String),
    #[error("Malformed cell: {0}")]
    MalformedCell(String),
}

/// Error type for secret/configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Missing secret `{0}` (set the environment variable or add it to secrets.json)")]
    Missing(&'static str),
}
