//! Get Brand Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use omahub_app::domain::brands::records::{BrandRecord, BrandUuid};

use crate::{brands::errors::into_api_error, errors::ApiError, extensions::*, state::State};

/// Brand Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BrandResponse {
    pub uuid: Uuid,
    pub name: String,

    /// ISO-4217 code the brand's orders are placed in
    pub currency: String,

    pub image_url: Option<String>,
}

impl From<BrandRecord> for BrandResponse {
    fn from(brand: BrandRecord) -> Self {
        Self {
            uuid: brand.uuid.into_uuid(),
            name: brand.name,
            currency: brand.currency,
            image_url: brand.image_url,
        }
    }
}

/// Get Brand Handler
#[endpoint(
    tags("brands"),
    summary = "Get Brand",
    security(("bearer_auth" = []), ("session_cookie" = []))
)]
pub(crate) async fn handler(
    brand: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<BrandResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let brand = state
        .app
        .brands
        .get_brand(BrandUuid::from_uuid(brand.into_inner()))
        .await
        .map_err(into_api_error)?;

    Ok(Json(brand.into()))
}
