//! Brand Catalogue Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use omahub_app::domain::brands::records::BrandUuid;

use crate::{
    brands::errors::{catalogue_error, into_api_error},
    errors::ApiError,
    extensions::*,
    products::get::ProductResponse,
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CatalogueResponse {
    pub brand_uuid: Uuid,

    /// Live products, oldest first
    pub products: Vec<ProductResponse>,
}

/// Brand Catalogue Handler
///
/// Lists a brand's live products.
#[endpoint(
    tags("brands"),
    summary = "List Brand Products",
    security(("bearer_auth" = []), ("session_cookie" = []))
)]
pub(crate) async fn handler(
    brand: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CatalogueResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let brand = BrandUuid::from_uuid(brand.into_inner());

    // Unknown brands are a 404, not an empty catalogue.
    state
        .app
        .brands
        .get_brand(brand)
        .await
        .map_err(into_api_error)?;

    let products = state
        .app
        .products
        .list_products(brand)
        .await
        .map_err(catalogue_error)?;

    Ok(Json(CatalogueResponse {
        brand_uuid: brand.into_uuid(),
        products: products.into_iter().map(Into::into).collect(),
    }))
}
