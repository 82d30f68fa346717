//! Notification Data

use serde_json::Value;

use crate::domain::{
    notifications::records::{NotificationKind, NotificationUuid},
    orders::records::OrderUuid,
    users::records::UserUuid,
};

/// New Notification
#[derive(Debug, Clone, PartialEq)]
pub struct NewNotification {
    pub uuid: NotificationUuid,
    pub recipient: UserUuid,
    pub order_uuid: OrderUuid,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub data: Value,
}
