//! Profile error mapping.

use tracing::error;

use omahub_app::domain::users::UsersServiceError;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: UsersServiceError) -> ApiError {
    match error {
        UsersServiceError::NotFound => ApiError::not_found("Profile not found"),
        UsersServiceError::EmailTaken | UsersServiceError::InvalidData => {
            ApiError::bad_request("Invalid profile")
        }
        UsersServiceError::Sql(source) => {
            error!("profile storage error: {source}");

            ApiError::internal()
        }
    }
}
