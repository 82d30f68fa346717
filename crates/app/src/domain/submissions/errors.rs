//! Basket submission errors.

use sqlx::Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BasketSubmissionError {
    #[error("customer profile could not be loaded")]
    ProfileUnavailable(#[source] Error),

    #[error("no items in basket")]
    NothingToSubmit,

    #[error("basket submission already in progress")]
    AlreadySubmitting,

    #[error("no orders could be created")]
    NoOrdersCreated,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for BasketSubmissionError {
    fn from(error: Error) -> Self {
        Self::Sql(error)
    }
}
