//! Brand Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    brands::{errors::into_api_error, get::BrandResponse},
    errors::ApiError,
    extensions::*,
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BrandsResponse {
    /// The brand directory, ordered by name
    pub brands: Vec<BrandResponse>,
}

/// Brand Index Handler
#[endpoint(
    tags("brands"),
    summary = "List Brands",
    security(("bearer_auth" = []), ("session_cookie" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<BrandsResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let brands = state
        .app
        .brands
        .list_brands()
        .await
        .map_err(into_api_error)?;

    Ok(Json(BrandsResponse {
        brands: brands.into_iter().map(Into::into).collect(),
    }))
}
