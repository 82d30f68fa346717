//! Notification Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use omahub_app::domain::notifications::records::NotificationRecord;

use crate::{errors::ApiError, extensions::*, notifications::errors::into_api_error, state::State};

/// Notification Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct NotificationResponse {
    pub uuid: Uuid,
    pub order_uuid: Option<Uuid>,

    /// Notification kind, e.g. `new_order`
    #[serde(rename = "type")]
    pub kind: String,

    pub title: String,
    pub message: String,

    /// Order snapshot: customer contact details, total, currency and item count
    pub data: Value,

    pub read: bool,
    pub read_at: Option<String>,
    pub created_at: String,
}

impl From<NotificationRecord> for NotificationResponse {
    fn from(notification: NotificationRecord) -> Self {
        Self {
            read: notification.is_read(),
            uuid: notification.uuid.into_uuid(),
            order_uuid: notification.order_uuid.map(Into::into),
            kind: notification.kind.to_string(),
            title: notification.title,
            message: notification.message,
            data: notification.data,
            read_at: notification.read_at.map(|read_at| read_at.to_string()),
            created_at: notification.created_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct NotificationsResponse {
    /// The user's inbox, newest first
    pub notifications: Vec<NotificationResponse>,

    pub unread: usize,
}

/// Notification Index Handler
///
/// Returns the signed-in user's inbox.
#[endpoint(
    tags("notifications"),
    summary = "List Notifications",
    security(("bearer_auth" = []), ("session_cookie" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<NotificationsResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_or_401()?;

    let notifications = state
        .app
        .notifications
        .list_notifications(user.uuid)
        .await
        .map_err(into_api_error)?;

    let unread = notifications
        .iter()
        .filter(|notification| !notification.is_read())
        .count();

    Ok(Json(NotificationsResponse {
        notifications: notifications.into_iter().map(Into::into).collect(),
        unread,
    }))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use omahub_app::domain::notifications::{
        MockNotificationsService, NotificationsServiceError, records::NotificationUuid,
    };

    use crate::test_helpers::{TEST_USER_UUID, app_service, mock_app};

    use super::{super::tests::make_notification, *};

    fn make_service(notifications: MockNotificationsService) -> Service {
        let mut app = mock_app();

        app.notifications = Arc::new(notifications);

        app_service(app, Router::with_path("api/notifications").get(handler))
    }

    #[tokio::test]
    async fn test_index_counts_unread() -> TestResult {
        let mut notifications = MockNotificationsService::new();

        let inbox = vec![
            make_notification(NotificationUuid::new(), None),
            make_notification(NotificationUuid::new(), Some(Timestamp::UNIX_EPOCH)),
        ];

        notifications
            .expect_list_notifications()
            .once()
            .withf(|user| *user == TEST_USER_UUID)
            .return_once(move |_| Ok(inbox));

        let mut res = TestClient::get("http://example.com/api/notifications")
            .send(&make_service(notifications))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: NotificationsResponse = res.take_json().await?;

        assert_eq!(body.notifications.len(), 2);
        assert_eq!(body.unread, 1);
        let kind = body.notifications.first().map(|n| n.kind.as_str());

        assert_eq!(kind, Some("new_order"));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_storage_error_returns_500() -> TestResult {
        let mut notifications = MockNotificationsService::new();

        notifications
            .expect_list_notifications()
            .once()
            .return_once(|_| Err(NotificationsServiceError::Sql(sqlx::Error::PoolClosed)));

        let res = TestClient::get("http://example.com/api/notifications")
            .send(&make_service(notifications))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
