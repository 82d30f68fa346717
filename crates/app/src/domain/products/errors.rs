//! Products service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error("product not found")]
    NotFound,

    #[error("brand not found")]
    UnknownBrand,

    #[error("product already exists")]
    Duplicate,

    /// Empty title, negative price or a sale price that fails a table check.
    #[error("invalid product data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for ProductsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        let kind = error.as_database_error().map(DatabaseError::kind);

        match kind {
            Some(ErrorKind::ForeignKeyViolation) => Self::UnknownBrand,
            Some(ErrorKind::UniqueViolation) => Self::Duplicate,
            Some(ErrorKind::CheckViolation | ErrorKind::NotNullViolation) => Self::InvalidData,
            _ => Self::Sql(error),
        }
    }
}
