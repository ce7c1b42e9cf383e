use thiserror::Error;

/// Errors produced while revealing the entries of a secret.
#[derive(Error, Debug)]
pub enum ViewSecretError {
    #[error("secret is empty")]
    SecretEmpty,
    #[error("provided key not found in secret: {0}")]
    SecretKeyNotFound(String),
    #[error("invalid selection: '{0}'")]
    InvalidSelection(String),
    #[error("failed to decode key '{key}': {reason}")]
    Decode {
        key: String,
        reason: base64::DecodeError,
    },
    #[error("failed to decode {} of {} key(s): {}", .failed.len(), .total, .failed.join(", "))]
    PartialDecode { failed: Vec<String>, total: usize },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while fetching a secret from its backing store.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to run {program}: {message}")]
    Spawn { program: String, message: String },
    #[error("{program} exited with {status}: {stderr}")]
    Command {
        program: String,
        status: String,
        stderr: String,
    },
    #[error("Failed to read secret file: {0}")]
    Read(String),
    #[error("Failed to parse secret JSON: {0}")]
    Parse(String),
}

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),
    #[error("Failed to parse config file: {0}")]
    ParseError(String),
}

/// Errors that can occur during argument validation.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("accepts 2 arg(s), received {received}")]
    TooManyArgs { received: usize },
    #[error("requires at least 1 arg(s), received 0")]
    MissingArgs,
    #[error("Secret name validation failed: {0}")]
    SecretName(String),
    #[error("Namespace validation failed: {0}")]
    Namespace(String),
    #[error("Secret key validation failed: {0}")]
    SecretKey(String),
}

impl ViewSecretError {
    /// Whether the error left partial output behind on the output stream.
    pub fn is_partial(&self) -> bool {
        matches!(self, ViewSecretError::PartialDecode { .. })
    }
}
