//! Get Profile Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use omahub_app::domain::users::records::ProfileRecord;

use crate::{errors::ApiError, extensions::*, profile::errors::into_api_error, state::State};

/// Profile Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProfileResponse {
    pub user_uuid: Uuid,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub updated_at: String,
}

impl From<ProfileRecord> for ProfileResponse {
    fn from(profile: ProfileRecord) -> Self {
        Self {
            user_uuid: profile.user_uuid.into_uuid(),
            full_name: profile.full_name,
            phone: profile.phone,
            address: profile.address,
            updated_at: profile.updated_at.to_string(),
        }
    }
}

/// Get Profile Handler
///
/// Returns the contact details copied onto the user's orders.
#[endpoint(
    tags("profile"),
    summary = "Get Profile",
    security(("bearer_auth" = []), ("session_cookie" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<ProfileResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_or_401()?;

    let profile = state
        .app
        .users
        .get_profile(user.uuid)
        .await
        .map_err(into_api_error)?;

    Ok(Json(profile.into()))
}
