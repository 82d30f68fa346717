//! Remove Basket Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use omahub_app::domain::baskets::records::BasketItemUuid;

use crate::{basket::errors::into_api_error, errors::ApiError, extensions::*, state::State};

/// Remove Basket Item Handler
#[endpoint(
    tags("basket"),
    summary = "Remove Basket Item",
    security(("bearer_auth" = []), ("session_cookie" = [])),
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Basket item removed"),
    ),
)]
pub(crate) async fn handler(
    item: PathParam<Uuid>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_or_401()?;

    state
        .app
        .baskets
        .remove_item(user.uuid, BasketItemUuid::from_uuid(item.into_inner()))
        .await
        .map_err(into_api_error)?;

    res.status_code(StatusCode::NO_CONTENT);

    Ok(())
}
