//! Get Order Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use omahub_app::domain::orders::records::{OrderItemRecord, OrderRecord, OrderUuid};

use crate::{errors::ApiError, extensions::*, orders::errors::into_api_error, state::State};

/// Order Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderResponse {
    pub uuid: Uuid,
    pub brand_uuid: Uuid,
    pub brand_name: String,

    /// One of `pending`, `confirmed`, `shipped`, `delivered`, `cancelled`
    pub status: String,

    pub total_amount: u64,
    pub currency: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub delivery_address: Option<String>,
    pub items: Vec<OrderItemResponse>,
    pub created_at: String,
}

impl From<OrderRecord> for OrderResponse {
    fn from(order: OrderRecord) -> Self {
        Self {
            uuid: order.uuid.into_uuid(),
            brand_uuid: order.brand_uuid.into_uuid(),
            brand_name: order.brand_name,
            status: order.status.to_string(),
            total_amount: order.total_amount,
            currency: order.currency,
            customer_name: order.customer_name,
            customer_email: order.customer_email,
            customer_phone: order.customer_phone,
            delivery_address: order.delivery_address,
            items: order.items.into_iter().map(Into::into).collect(),
            created_at: order.created_at.to_string(),
        }
    }
}

/// Order Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderItemResponse {
    pub uuid: Uuid,
    pub product_uuid: Uuid,
    pub quantity: u32,
    pub size: Option<String>,
    pub colour: Option<String>,
    pub notes: Option<String>,

    /// Unit price at submission
    pub price: u64,
}

impl From<OrderItemRecord> for OrderItemResponse {
    fn from(item: OrderItemRecord) -> Self {
        Self {
            uuid: item.uuid.into_uuid(),
            product_uuid: item.product_uuid.into_uuid(),
            quantity: item.quantity,
            size: item.size,
            colour: item.colour,
            notes: item.notes,
            price: item.price,
        }
    }
}

/// Get Order Handler
#[endpoint(
    tags("orders"),
    summary = "Get Order",
    security(("bearer_auth" = []), ("session_cookie" = []))
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_or_401()?;

    let order = state
        .app
        .orders
        .get_order(user.uuid, OrderUuid::from_uuid(order.into_inner()))
        .await
        .map_err(into_api_error)?;

    Ok(Json(order.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use omahub_app::domain::orders::{MockOrdersService, OrdersServiceError};

    use crate::test_helpers::{TEST_USER_UUID, app_service, mock_app};

    use super::{super::tests::make_order, *};

    fn make_service(orders: MockOrdersService) -> Service {
        let mut app = mock_app();

        app.orders = Arc::new(orders);

        app_service(app, Router::with_path("api/orders/{order}").get(handler))
    }

    #[tokio::test]
    async fn test_get_returns_order_with_items() -> TestResult {
        let mut orders = MockOrdersService::new();
        let uuid = OrderUuid::new();
        let order = make_order(uuid, "Lagos Loom", &[45_000, 72_000]);

        orders
            .expect_get_order()
            .once()
            .withf(move |user, o| *user == TEST_USER_UUID && *o == uuid)
            .return_once(move |_, _| Ok(order));

        let mut res = TestClient::get(format!("http://example.com/api/orders/{uuid}"))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: OrderResponse = res.take_json().await?;

        assert_eq!(body.status, "pending");
        assert_eq!(body.total_amount, 117_000);
        assert_eq!(body.items.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn test_foreign_order_returns_404() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_get_order()
            .once()
            .return_once(|_, _| Err(OrdersServiceError::NotFound));

        let res = TestClient::get(format!("http://example.com/api/orders/{}", Uuid::now_v7()))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
