//! Notification Records

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use serde_json::Value;

use crate::{
    domain::{orders::records::OrderUuid, users::records::UserUuid},
    uuids::TypedUuid,
};

/// Notification UUID
pub type NotificationUuid = TypedUuid<NotificationRecord>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    NewOrder,
}

impl NotificationKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NewOrder => "new_order",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownNotificationKind(pub String);

impl fmt::Display for UnknownNotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown notification kind: {}", self.0)
    }
}

impl std::error::Error for UnknownNotificationKind {}

impl FromStr for NotificationKind {
    type Err = UnknownNotificationKind;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "new_order" => Ok(Self::NewOrder),
            other => Err(UnknownNotificationKind(other.to_string())),
        }
    }
}

/// Notification Record
///
/// An entry in a brand owner's inbox.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationRecord {
    pub uuid: NotificationUuid,
    pub user_uuid: UserUuid,
    pub order_uuid: Option<OrderUuid>,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub data: Value,
    pub read_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

impl NotificationRecord {
    #[must_use]
    pub fn is_read(&self) -> bool {
        self.read_at.is_some()
    }
}
