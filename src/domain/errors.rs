// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Errors an article service reports back to the HTTP layer.
///
/// The first three variants are the categories the status classifier knows
/// about; everything else lands in the internal-error bucket.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("not found")]
    NotFound,
    #[error("conflict")]
    Conflict,
    #[error("internal server error")]
    InternalServerError,
    #[error("bad parameter input")]
    BadParamInput,
    #[error("{0}")]
    Other(String),
}

impl DomainError {
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}
