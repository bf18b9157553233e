use super::validate_hierarchy::{HierarchyError, HierarchyViolation};
use crate::{repositories, util::validate::CommentInvalidation};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A referenced ancestor is missing or the giver is not authorized.
    #[error("{0}")]
    EntityDoesNotExist(HierarchyViolation),
    #[error("Trying to update non-existent feedback response comment")]
    CommentDoesNotExist,
    #[error(transparent)]
    InvalidParameters(#[from] ParameterError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

/// Defects of the parameters of a comment itself.
#[derive(Debug, Error)]
pub enum ParameterError {
    #[error(transparent)]
    Field(#[from] CommentInvalidation),
    #[error("{0}")]
    Hierarchy(HierarchyViolation),
}

impl From<CommentInvalidation> for Error {
    fn from(err: CommentInvalidation) -> Self {
        Self::InvalidParameters(err.into())
    }
}

impl HierarchyError {
    // Creating a comment below a missing ancestor is reported as
    // a missing entity.
    pub(crate) fn into_create_error(self) -> Error {
        match self {
            Self::Violation(v) => Error::EntityDoesNotExist(v),
            Self::Repo(err) => Error::Repo(err),
        }
    }

    // An update describes an existing comment, so the same defect is
    // reported as invalid parameters of that comment.
    pub(crate) fn into_update_error(self) -> Error {
        match self {
            Self::Violation(v) => Error::InvalidParameters(ParameterError::Hierarchy(v)),
            Self::Repo(err) => Error::Repo(err),
        }
    }
}
