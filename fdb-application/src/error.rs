use fdb_core::{repositories::Error as RepoError, usecases::Error as UsecaseError};
use std::io;
use thiserror::Error;

pub use fdb_core::repositories;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> AppError {
        AppError::Business(BError::Repo(err))
    }
}

impl From<UsecaseError> for AppError {
    fn from(err: UsecaseError) -> AppError {
        AppError::Business(err.into())
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] BError),
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl AppError {
    /// The use case error behind this error, if any.
    pub fn usecase_error(&self) -> Option<&UsecaseError> {
        match self {
            Self::Business(BError::Usecase(err)) => Some(err),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum BError {
    #[error(transparent)]
    Usecase(UsecaseError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<UsecaseError> for BError {
    fn from(err: UsecaseError) -> Self {
        match err {
            UsecaseError::Repo(err) => Self::Repo(err),
            err => Self::Usecase(err),
        }
    }
}
