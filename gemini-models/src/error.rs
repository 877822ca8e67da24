//! Error definitions for the model catalog.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{name} environment variable is not set")]
    MissingCredential {
        name: String,
        /// 名称中包含相关子串的环境变量（排序后），用于排查。
        related: Vec<String>,
    },

    #[error("HTTP client error: {source}")]
    HttpClient {
        #[from]
        source: reqwest::Error,
    },

    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Parse error: {message}")]
    Parse { message: String },

    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },

    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
