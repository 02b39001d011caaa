use thiserror::Error;
use std::io;

/// Client-specific error type
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Connection error: {0}")]
    Connection(String),

    /// Failure raised by the external client factory, carried unchanged.
    #[error("Client factory error: {0}")]
    Factory(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Client-specific result type
pub type Result<T> = std::result::Result<T, ClientError>;

impl ClientError {
    /// Wrap an arbitrary factory failure without interpreting it.
    pub fn factory<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        ClientError::Factory(Box::new(err))
    }
}
