//! Submit Basket Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use omahub_app::{
    auth::AuthenticatedUser,
    domain::submissions::records::{PlacedOrder, SubmissionReceipt},
};

use crate::{
    basket::errors::{submission_error, submission_outcome},
    errors::ApiError,
    extensions::*,
    observability::observe_submission,
    state::State,
};

/// Basket Submitted Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SubmitBasketResponse {
    /// Always `true`; failures use the error body
    pub success: bool,

    pub message: String,

    /// One order per brand in the basket
    pub orders: Vec<PlacedOrderResponse>,

    /// Number of brand owners notified about their order
    pub notifications_sent: usize,

    /// The customer who placed the orders
    pub user: SubmittingUserResponse,
}

impl SubmitBasketResponse {
    fn new(receipt: SubmissionReceipt, user: &AuthenticatedUser) -> Self {
        Self {
            success: true,
            message: "Basket submitted successfully".to_string(),
            orders: receipt
                .orders
                .into_iter()
                .map(PlacedOrderResponse::from)
                .collect(),
            notifications_sent: receipt.notifications_sent,
            user: SubmittingUserResponse {
                id: user.uuid.into_uuid(),
                email: user.email.clone(),
            },
        }
    }
}

/// Placed Order Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PlacedOrderResponse {
    /// The unique identifier of the created order
    pub order_id: Uuid,

    pub brand_name: String,

    /// Sum of `price * quantity` over the order's items, in minor units
    pub total: u64,

    /// ISO-4217 currency of the brand
    pub currency: String,

    pub items_count: usize,
}

impl From<PlacedOrder> for PlacedOrderResponse {
    fn from(order: PlacedOrder) -> Self {
        Self {
            order_id: order.order_uuid.into_uuid(),
            brand_name: order.brand_name,
            total: order.total,
            currency: order.currency,
            items_count: order.items_count,
        }
    }
}

/// Submitting User Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SubmittingUserResponse {
    pub id: Uuid,
    pub email: String,
}

/// Submit Basket Handler
///
/// Splits the basket into one order per brand, notifies each brand owner and
/// clears the basket.
#[endpoint(
    tags("basket"),
    summary = "Submit Basket",
    security(("bearer_auth" = []), ("session_cookie" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<SubmitBasketResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_or_401()?;

    let receipt = match state.app.submissions.submit_basket(user).await {
        Ok(receipt) => receipt,
        Err(error) => {
            observe_submission(submission_outcome(&error), 0);

            return Err(submission_error(error));
        }
    };

    observe_submission("submitted", receipt.orders.len());

    Ok(Json(SubmitBasketResponse::new(receipt, user)))
}
