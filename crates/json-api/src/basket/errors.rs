//! Errors

use tracing::error;

use omahub_app::domain::{baskets::BasketsServiceError, submissions::BasketSubmissionError};

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: BasketsServiceError) -> ApiError {
    match error {
        BasketsServiceError::NotFound => ApiError::not_found("Basket item not found"),
        BasketsServiceError::InvalidData => ApiError::bad_request("Invalid basket item"),
        BasketsServiceError::Sql(source) => {
            error!("basket storage error: {source}");

            ApiError::internal()
        }
    }
}

pub(crate) fn submission_error(error: BasketSubmissionError) -> ApiError {
    match error {
        BasketSubmissionError::NothingToSubmit => ApiError::bad_request("No items in basket"),
        BasketSubmissionError::AlreadySubmitting => {
            ApiError::conflict("Basket submission already in progress")
        }
        BasketSubmissionError::ProfileUnavailable(source) => {
            error!("failed to load customer profile for submission: {source}");

            ApiError::internal()
        }
        BasketSubmissionError::NoOrdersCreated => {
            error!("basket submission created no orders");

            ApiError::internal()
        }
        BasketSubmissionError::Sql(source) => {
            error!("basket submission failed: {source}");

            ApiError::internal()
        }
    }
}

/// Metrics label for a failed submission.
pub(crate) fn submission_outcome(error: &BasketSubmissionError) -> &'static str {
    match error {
        BasketSubmissionError::NothingToSubmit => "empty",
        BasketSubmissionError::AlreadySubmitting => "conflict",
        BasketSubmissionError::ProfileUnavailable(_)
        | BasketSubmissionError::NoOrdersCreated
        | BasketSubmissionError::Sql(_) => "failed",
    }
}
