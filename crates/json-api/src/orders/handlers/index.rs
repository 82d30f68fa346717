//! Order Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    errors::ApiError,
    extensions::*,
    orders::{errors::into_api_error, get::OrderResponse},
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrdersResponse {
    /// The user's orders, newest first
    pub orders: Vec<OrderResponse>,
}

/// Order Index Handler
#[endpoint(
    tags("orders"),
    summary = "List Orders",
    security(("bearer_auth" = []), ("session_cookie" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<OrdersResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_or_401()?;

    let orders = state
        .app
        .orders
        .list_orders(user.uuid)
        .await
        .map_err(into_api_error)?;

    Ok(Json(OrdersResponse {
        orders: orders.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use omahub_app::domain::orders::{MockOrdersService, records::OrderUuid};

    use crate::test_helpers::{TEST_USER_UUID, app_service, mock_app};

    use super::{super::tests::make_order, *};

    fn make_service(orders: MockOrdersService) -> Service {
        let mut app = mock_app();

        app.orders = Arc::new(orders);

        app_service(app, Router::with_path("api/orders").get(handler))
    }

    #[tokio::test]
    async fn test_index_lists_user_orders() -> TestResult {
        let mut orders = MockOrdersService::new();

        let placed = vec![
            make_order(OrderUuid::new(), "Lagos Loom", &[20]),
            make_order(OrderUuid::new(), "Accra Thread", &[5]),
        ];

        orders
            .expect_list_orders()
            .once()
            .withf(|user| *user == TEST_USER_UUID)
            .return_once(move |_| Ok(placed));

        let mut res = TestClient::get("http://example.com/api/orders")
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: OrdersResponse = res.take_json().await?;

        let brands: Vec<_> = body
            .orders
            .iter()
            .map(|order| order.brand_name.as_str())
            .collect();

        assert_eq!(brands, ["Lagos Loom", "Accra Thread"]);

        Ok(())
    }
}
