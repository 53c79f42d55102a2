use sheldon_core::{ClientError, ConfigError, QueryError, ValidationError};
use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Config(_) => 3,
            Self::Query(error) => match error.client_error() {
                Some(ClientError::Validation(_)) => 2,
                Some(ClientError::Network(_) | ClientError::HttpStatus { .. }) => 4,
                Some(ClientError::Decode(_) | ClientError::UnexpectedFormat { .. }) => 5,
                None => 10,
            },
            Self::Io(_) => 10,
        }
    }
}
