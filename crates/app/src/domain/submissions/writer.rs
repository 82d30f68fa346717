//! Postgres order writer.

use async_trait::async_trait;
use serde_json::json;
use sqlx::{Acquire, Postgres, Transaction};
use tracing::warn;

use crate::{
    database::Db,
    domain::{
        notifications::{
            data::NewNotification,
            records::{NotificationKind, NotificationUuid},
            repository::PgNotificationsRepository,
        },
        orders::{
            records::{OrderItemUuid, OrderRecord, OrderUuid},
            repositories::{NewOrder, NewOrderItem, PgOrderItemsRepository, PgOrdersRepository},
        },
        submissions::{
            customer::Customer,
            grouping::BrandGroup,
            placement::{OrderWriteError, OrderWriter, WrittenOrder},
            records::PlacedOrder,
        },
        users::records::UserUuid,
    },
};

/// Writes an order and its items in one transaction. The owner notification
/// goes through a savepoint so its failure leaves the order intact.
#[derive(Debug, Clone)]
pub(crate) struct PgOrderWriter {
    db: Db,
    orders_repository: PgOrdersRepository,
    items_repository: PgOrderItemsRepository,
    notifications_repository: PgNotificationsRepository,
}

impl PgOrderWriter {
    #[must_use]
    pub(crate) fn new(db: Db) -> Self {
        Self {
            db,
            orders_repository: PgOrdersRepository::new(),
            items_repository: PgOrderItemsRepository::new(),
            notifications_repository: PgNotificationsRepository::new(),
        }
    }

    async fn notify_owner(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        owner: UserUuid,
        order: &OrderRecord,
        items_count: usize,
    ) -> bool {
        let notification = new_order_notification(owner, order, items_count);

        let mut savepoint = match Acquire::begin(&mut *tx).await {
            Ok(savepoint) => savepoint,
            Err(error) => {
                warn!(order = %order.uuid, %error, "failed to open notification savepoint");
                return false;
            }
        };

        if let Err(error) = self
            .notifications_repository
            .create_notification(&mut savepoint, notification)
            .await
        {
            warn!(order = %order.uuid, owner = %owner, %error, "failed to notify brand owner");

            if let Err(error) = savepoint.rollback().await {
                warn!(order = %order.uuid, %error, "failed to roll back notification");
            }

            return false;
        }

        if let Err(error) = savepoint.commit().await {
            warn!(order = %order.uuid, %error, "failed to release notification savepoint");
            return false;
        }

        true
    }
}

#[async_trait]
impl OrderWriter for PgOrderWriter {
    async fn write_order(
        &self,
        user: UserUuid,
        customer: &Customer,
        group: &BrandGroup,
    ) -> Result<WrittenOrder, OrderWriteError> {
        let mut tx = self
            .db
            .begin_user_transaction(user)
            .await
            .map_err(OrderWriteError::Begin)?;

        let order = self
            .orders_repository
            .create_order(
                &mut tx,
                NewOrder {
                    uuid: OrderUuid::new(),
                    user_uuid: user,
                    brand_uuid: group.brand.uuid,
                    basket_uuid: group.basket_uuid,
                    total_amount: group.total,
                    customer_name: customer.name.clone(),
                    customer_email: customer.email.clone(),
                    customer_phone: customer.phone.clone(),
                    delivery_address: customer.address.clone(),
                },
            )
            .await
            .map_err(OrderWriteError::Order)?;

        for line in &group.lines {
            self.items_repository
                .create_order_item(
                    &mut tx,
                    order.uuid,
                    NewOrderItem {
                        uuid: OrderItemUuid::new(),
                        product_uuid: line.product_uuid,
                        quantity: line.quantity,
                        size: line.size.clone(),
                        colour: line.colour.clone(),
                        notes: line.notes.clone(),
                        price: line.price,
                    },
                )
                .await
                .map_err(OrderWriteError::Item)?;
        }

        let items_count = group.lines.len();

        let notified = match group.brand.owner_uuid {
            Some(owner) => self.notify_owner(&mut tx, owner, &order, items_count).await,
            None => false,
        };

        tx.commit().await.map_err(OrderWriteError::Commit)?;

        Ok(WrittenOrder {
            order: PlacedOrder {
                order_uuid: order.uuid,
                brand_name: order.brand_name,
                total: order.total_amount,
                currency: order.currency,
                items_count,
            },
            notified,
        })
    }
}

fn new_order_notification(
    owner: UserUuid,
    order: &OrderRecord,
    items_count: usize,
) -> NewNotification {
    NewNotification {
        uuid: NotificationUuid::new(),
        recipient: owner,
        order_uuid: order.uuid,
        kind: NotificationKind::NewOrder,
        title: "New order received".to_string(),
        message: format!(
            "{} placed an order for {items_count} item(s) from {}",
            order.customer_name, order.brand_name
        ),
        data: json!({
            "order_id": order.uuid,
            "customer_name": order.customer_name,
            "customer_email": order.customer_email,
            "customer_phone": order.customer_phone,
            "delivery_address": order.delivery_address,
            "total": order.total_amount,
            "currency": order.currency,
            "items_count": items_count,
        }),
    }
}
