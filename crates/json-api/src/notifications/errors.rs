//! Errors

use tracing::error;

use omahub_app::domain::notifications::NotificationsServiceError;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: NotificationsServiceError) -> ApiError {
    match error {
        NotificationsServiceError::NotFound => ApiError::not_found("Notification not found"),
        NotificationsServiceError::Sql(source) => {
            error!("notification storage error: {source}");

            ApiError::internal()
        }
    }
}
