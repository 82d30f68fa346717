//! Sequential per-brand order placement.

use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;
use tracing::{error, info};

use crate::domain::{
    baskets::records::BasketUuid,
    brands::records::BrandUuid,
    submissions::{customer::Customer, grouping::BrandGroup, records::PlacedOrder},
    users::records::UserUuid,
};

#[derive(Debug, Error)]
pub(crate) enum OrderWriteError {
    #[error("failed to open order transaction")]
    Begin(#[source] sqlx::Error),

    #[error("failed to insert order")]
    Order(#[source] sqlx::Error),

    #[error("failed to insert order item")]
    Item(#[source] sqlx::Error),

    #[error("failed to commit order")]
    Commit(#[source] sqlx::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct WrittenOrder {
    pub(crate) order: PlacedOrder,
    pub(crate) notified: bool,
}

/// Writes one brand group as an order with its items, all or nothing.
#[automock]
#[async_trait]
pub(crate) trait OrderWriter: Send + Sync {
    async fn write_order(
        &self,
        user: UserUuid,
        customer: &Customer,
        group: &BrandGroup,
    ) -> Result<WrittenOrder, OrderWriteError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DroppedGroup {
    pub(crate) basket_uuid: BasketUuid,
    pub(crate) brand_uuid: BrandUuid,
    pub(crate) brand_name: String,
    pub(crate) items: usize,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Placement {
    pub(crate) orders: Vec<PlacedOrder>,
    pub(crate) notifications_sent: usize,
    pub(crate) dropped: Vec<DroppedGroup>,
}

/// Write every group in turn. A failed group is logged and skipped.
pub(crate) async fn place_orders(
    writer: &dyn OrderWriter,
    user: UserUuid,
    customer: &Customer,
    groups: &[BrandGroup],
) -> Placement {
    let mut placement = Placement::default();

    for group in groups {
        match writer.write_order(user, customer, group).await {
            Ok(written) => {
                info!(
                    order = %written.order.order_uuid,
                    brand = %group.brand.uuid,
                    total = written.order.total,
                    items = written.order.items_count,
                    "order placed"
                );

                if written.notified {
                    placement.notifications_sent += 1;
                }

                placement.orders.push(written.order);
            }
            Err(error) => {
                error!(
                    basket = %group.basket_uuid,
                    brand = %group.brand.uuid,
                    error = %error,
                    "failed to place order for brand group"
                );

                placement.dropped.push(DroppedGroup {
                    basket_uuid: group.basket_uuid,
                    brand_uuid: group.brand.uuid,
                    brand_name: group.brand.name.clone(),
                    items: group.lines.len(),
                });
            }
        }
    }

    placement
}
