use thiserror::Error;

/// Errors raised while validating options or generating a password.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Character pool is empty after applying exclusions")]
    EmptyCharset,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GeneratorError {
    pub fn invalid(message: impl Into<String>) -> Self {
        GeneratorError::InvalidArgument(message.into())
    }
}

impl From<serde_json::Error> for GeneratorError {
    fn from(e: serde_json::Error) -> Self {
        GeneratorError::InvalidArgument(format!("could not parse options: {}", e))
    }
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
