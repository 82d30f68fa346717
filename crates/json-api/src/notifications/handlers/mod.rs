//! Notification Handlers

pub(crate) mod index;
pub(crate) mod read;

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use serde_json::json;

    use omahub_app::domain::{
        notifications::records::{NotificationKind, NotificationRecord, NotificationUuid},
        orders::records::OrderUuid,
    };

    use crate::test_helpers::TEST_USER_UUID;

    pub(super) fn make_notification(
        uuid: NotificationUuid,
        read_at: Option<Timestamp>,
    ) -> NotificationRecord {
        let order = OrderUuid::new();

        NotificationRecord {
            uuid,
            user_uuid: TEST_USER_UUID,
            order_uuid: Some(order),
            kind: NotificationKind::NewOrder,
            title: "New order received".to_string(),
            message: "Ada Obi placed an order for 2 item(s) from Lagos Loom".to_string(),
            data: json!({ "order_id": order, "total": 117_000, "currency": "NGN" }),
            read_at,
            created_at: Timestamp::UNIX_EPOCH,
        }
    }
}
