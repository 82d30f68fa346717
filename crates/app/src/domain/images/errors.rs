//! Images service errors.

use sqlx::Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImagesServiceError {
    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for ImagesServiceError {
    fn from(error: Error) -> Self {
        Self::Sql(error)
    }
}
