use thiserror::Error;

/// Every way a configuration can fail to decode, load or fetch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid Shadowsocks URI: {0}")]
    InvalidUriFormat(String),

    #[error("Invalid base64 encoding: {0}")]
    InvalidBase64(String),

    #[error("Invalid SIP008 JSON: {0}")]
    InvalidJsonFormat(String),

    #[error("Missing required field: {field}")]
    MissingRequiredField { field: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("SIP008 documents must be delivered over HTTPS: {0}")]
    NonHttpsUrl(String),

    #[error("Failed to fetch SIP008 document: {0}")]
    NetworkFetchFailure(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl ConfigError {
    pub(crate) fn missing(field: &str) -> Self {
        ConfigError::MissingRequiredField {
            field: field.to_string(),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::InvalidJsonFormat(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;
