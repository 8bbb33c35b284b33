use crate::core::git::ExecError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitBatchError {
    #[error("Not a valid git repository: {path}")]
    InvalidRepository { path: String },

    #[error("Git operation failed: {source}")]
    Exec {
        #[from]
        source: ExecError,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid arguments: {message}")]
    InvalidArgs { message: String },

    #[error("{failed} branch deletion(s) failed, {succeeded} succeeded")]
    PartialDeletion { failed: usize, succeeded: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GitBatchError>;

impl GitBatchError {
    pub fn invalid_repository(path: impl Into<PathBuf>) -> Self {
        Self::InvalidRepository {
            path: path.into().to_string_lossy().to_string(),
        }
    }

    pub fn config_error(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn invalid_args(message: impl Into<String>) -> Self {
        Self::InvalidArgs {
            message: message.into(),
        }
    }

    pub fn partial_deletion(failed: usize, succeeded: usize) -> Self {
        Self::PartialDeletion { failed, succeeded }
    }
}

impl From<crate::config::ConfigError> for GitBatchError {
    fn from(error: crate::config::ConfigError) -> Self {
        Self::Config {
            message: error.to_string(),
        }
    }
}
