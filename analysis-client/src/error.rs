use thiserror::Error;

/// Errors returned by the Analysis Service client.
#[derive(Error, Debug)]
pub enum Error {
    /// Client was built with missing or invalid settings.
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Transport failure, timeout, non-success status or undecodable body.
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),
    /// The service answered successfully but the payload broke the protocol.
    #[error("Analysis Service returned an invalid response: {0}")]
    InvalidResponse(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Analysis Service base URL is required")]
    MissingBaseUrl,
    #[error("Analysis Service base URL {url:?} is invalid: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("Analysis Service API key is required")]
    MissingApiKey,
    #[error("Analysis Service request timeout must be greater than zero")]
    ZeroTimeout,
}
