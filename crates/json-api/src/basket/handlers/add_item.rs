//! Add Basket Item Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use omahub_app::domain::{
    baskets::{BasketsServiceError, data::NewBasketItem, records::BasketItemUuid},
    products::records::ProductUuid,
};

use crate::{
    basket::{errors::into_api_error, get::BasketItemResponse},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Add Basket Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddBasketItemRequest {
    pub product_uuid: Uuid,

    /// At least one
    pub quantity: u32,

    pub size: Option<String>,
    pub colour: Option<String>,
    pub notes: Option<String>,
}

impl AddBasketItemRequest {
    fn into_new_item(self) -> Result<NewBasketItem, ApiError> {
        if self.quantity == 0 {
            return Err(ApiError::bad_request("Quantity must be at least 1"));
        }

        Ok(NewBasketItem {
            uuid: BasketItemUuid::new(),
            product_uuid: ProductUuid::from_uuid(self.product_uuid),
            quantity: self.quantity,
            size: self.size,
            colour: self.colour,
            notes: self.notes,
        })
    }
}

/// Add Basket Item Handler
///
/// Adds a product to the signed-in user's open basket at its current price.
#[endpoint(
    tags("basket"),
    summary = "Add Basket Item",
    security(("bearer_auth" = []), ("session_cookie" = []))
)]
pub(crate) async fn handler(
    json: JsonBody<AddBasketItemRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<BasketItemResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_or_401()?;
    let item = json.into_inner().into_new_item()?;

    let item = state
        .app
        .baskets
        .add_item(user.uuid, item)
        .await
        .map_err(|error| match error {
            BasketsServiceError::NotFound => ApiError::not_found("Product not found"),
            other => into_api_error(other),
        })?;

    res.add_header(LOCATION, format!("/api/basket/items/{}", item.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(item.into()))
}
