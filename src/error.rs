//! Error types for the Zoom client

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Token endpoint answered with a non-2xx status.
    #[error("Failed to get access token: HTTP {status}\n{message}")]
    Auth { status: u16, message: String },

    /// Meeting endpoint answered with a non-2xx status.
    #[error("Zoom API error: HTTP {status}\n{message}")]
    Api { status: u16, message: String },

    #[error("Missing required environment variables: {}", .0.join(", "))]
    MissingCredentials(Vec<String>),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl Error {
    /// Upstream HTTP status, when the error came from a Zoom response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Auth { status, .. } | Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::SerializationError(err.to_string())
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::SerializationError(err.to_string())
    }
}
