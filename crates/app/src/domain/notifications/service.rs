//! Notifications service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        notifications::{
            errors::NotificationsServiceError,
            records::{NotificationRecord, NotificationUuid},
            repository::PgNotificationsRepository,
        },
        users::records::UserUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgNotificationsService {
    db: Db,
    repository: PgNotificationsRepository,
}

impl PgNotificationsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgNotificationsRepository::new(),
        }
    }
}

#[async_trait]
impl NotificationsService for PgNotificationsService {
    async fn list_notifications(
        &self,
        user: UserUuid,
    ) -> Result<Vec<NotificationRecord>, NotificationsServiceError> {
        let mut tx = self.db.begin_user_transaction(user).await?;

        let notifications = self.repository.list_notifications(&mut tx, user).await?;

        tx.commit().await?;

        Ok(notifications)
    }

    async fn mark_read(
        &self,
        user: UserUuid,
        notification: NotificationUuid,
    ) -> Result<NotificationRecord, NotificationsServiceError> {
        let mut tx = self.db.begin_user_transaction(user).await?;

        let notification = self
            .repository
            .mark_read(&mut tx, user, notification)
            .await?;

        tx.commit().await?;

        Ok(notification)
    }
}

#[automock]
#[async_trait]
pub trait NotificationsService: Send + Sync {
    /// List the user's inbox, newest first.
    async fn list_notifications(
        &self,
        user: UserUuid,
    ) -> Result<Vec<NotificationRecord>, NotificationsServiceError>;

    /// Mark a notification as read. Marking twice keeps the first timestamp.
    async fn mark_read(
        &self,
        user: UserUuid,
        notification: NotificationUuid,
    ) -> Result<NotificationRecord, NotificationsServiceError>;
}
