//! Auth middleware.
//!
//! Resolves the caller from the session cookie, falling back to an
//! `Authorization: Bearer` token.

use std::sync::Arc;

use omahub_app::auth::{AuthServiceError, SessionCredentials};
use salvo::{http::header::AUTHORIZATION, prelude::*};
use tracing::error;

use crate::{errors::ApiError, extensions::*, state::State};

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let state = match depot.obtain_or_500::<Arc<State>>() {
        Ok(state) => state,
        Err(error) => {
            res.render(error);
            ctrl.skip_rest();

            return;
        }
    };

    let credentials = extract_credentials(req, &state.session_cookie_name);

    if credentials.is_empty() {
        res.render(ApiError::unauthorized());
        ctrl.skip_rest();

        return;
    }

    let user = match state.app.auth.authenticate(credentials).await {
        Ok(user) => user,
        Err(AuthServiceError::NotFound | AuthServiceError::Token(_)) => {
            res.render(ApiError::unauthorized());
            ctrl.skip_rest();

            return;
        }
        Err(AuthServiceError::Sql(source)) => {
            error!("failed to validate session: {source}");

            res.render(ApiError::internal());
            ctrl.skip_rest();

            return;
        }
    };

    depot.insert_user(user);

    ctrl.call_next(req, depot, res).await;
}

fn extract_credentials(req: &Request, cookie_name: &str) -> SessionCredentials {
    SessionCredentials {
        cookie: req
            .cookie(cookie_name)
            .map(|cookie| cookie.value().trim().to_string())
            .filter(|value| !value.is_empty()),
        bearer: extract_bearer_token(req).map(str::to_string),
    }
}

fn extract_bearer_token(req: &Request) -> Option<&str> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let mut parts = value.splitn(2, ' ');

    let scheme = parts.next()?;
    let token = parts.next()?.trim();

    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }

    Some(token)
}
