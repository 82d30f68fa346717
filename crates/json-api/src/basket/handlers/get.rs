//! Get Basket Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use omahub_app::domain::baskets::{
    BasketsServiceError,
    records::{BasketItemRecord, BasketRecord},
};

use crate::{basket::errors::into_api_error, errors::ApiError, extensions::*, state::State};

/// Basket Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BasketResponse {
    /// The open basket, absent until the first item is added
    pub uuid: Option<Uuid>,

    pub items: Vec<BasketItemResponse>,

    /// Sum of `price * quantity` over the items
    pub subtotal: u64,
}

impl BasketResponse {
    fn empty() -> Self {
        Self {
            uuid: None,
            items: Vec::new(),
            subtotal: 0,
        }
    }
}

impl From<BasketRecord> for BasketResponse {
    fn from(basket: BasketRecord) -> Self {
        Self {
            uuid: Some(basket.uuid.into_uuid()),
            subtotal: basket.subtotal(),
            items: basket
                .items
                .into_iter()
                .map(BasketItemResponse::from)
                .collect(),
        }
    }
}

/// Basket Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BasketItemResponse {
    pub uuid: Uuid,

    /// `None` once the product has been removed from the catalogue
    pub product_uuid: Option<Uuid>,

    pub quantity: u32,
    pub size: Option<String>,
    pub colour: Option<String>,
    pub notes: Option<String>,

    /// Unit price captured when the item was added
    pub price: u64,

    pub created_at: String,
}

impl From<BasketItemRecord> for BasketItemResponse {
    fn from(item: BasketItemRecord) -> Self {
        Self {
            uuid: item.uuid.into_uuid(),
            product_uuid: item.product_uuid.map(Into::into),
            quantity: item.quantity,
            size: item.size,
            colour: item.colour,
            notes: item.notes,
            price: item.price,
            created_at: item.created_at.to_string(),
        }
    }
}

/// Get Basket Handler
///
/// Returns the signed-in user's open basket.
#[endpoint(
    tags("basket"),
    summary = "Get Basket",
    security(("bearer_auth" = []), ("session_cookie" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<BasketResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_or_401()?;

    match state.app.baskets.get_basket(user.uuid).await {
        Ok(basket) => Ok(Json(basket.into())),
        Err(BasketsServiceError::NotFound) => Ok(Json(BasketResponse::empty())),
        Err(error) => Err(into_api_error(error)),
    }
}
