//! Mark Notification Read Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use omahub_app::domain::notifications::records::NotificationUuid;

use crate::{
    errors::ApiError,
    extensions::*,
    notifications::{errors::into_api_error, index::NotificationResponse},
    state::State,
};

/// Mark Notification Read Handler
///
/// Marking an already-read notification keeps its original `read_at`.
#[endpoint(
    tags("notifications"),
    summary = "Mark Notification Read",
    security(("bearer_auth" = []), ("session_cookie" = []))
)]
pub(crate) async fn handler(
    notification: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<NotificationResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_or_401()?;

    let notification = state
        .app
        .notifications
        .mark_read(
            user.uuid,
            NotificationUuid::from_uuid(notification.into_inner()),
        )
        .await
        .map_err(into_api_error)?;

    Ok(Json(notification.into()))
}
