//! Update Profile Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use omahub_app::domain::users::data::ProfileUpdate;

use crate::{
    errors::ApiError,
    extensions::*,
    profile::{errors::into_api_error, get::ProfileResponse},
    state::State,
};

/// Update Profile Request
///
/// Replaces every field; omitted fields are cleared.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateProfileRequest {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl From<UpdateProfileRequest> for ProfileUpdate {
    fn from(request: UpdateProfileRequest) -> Self {
        ProfileUpdate {
            full_name: request.full_name,
            phone: request.phone,
            address: request.address,
        }
    }
}

/// Update Profile Handler
#[endpoint(
    tags("profile"),
    summary = "Update Profile",
    security(("bearer_auth" = []), ("session_cookie" = []))
)]
pub(crate) async fn handler(
    json: JsonBody<UpdateProfileRequest>,
    depot: &mut Depot,
) -> Result<Json<ProfileResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_or_401()?;

    let profile = state
        .app
        .users
        .upsert_profile(user.uuid, json.into_inner().into())
        .await
        .map_err(into_api_error)?;

    Ok(Json(profile.into()))
}
