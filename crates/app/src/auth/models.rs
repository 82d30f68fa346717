//! Auth data models.

use jiff::Timestamp;

use crate::{domain::users::records::UserUuid, uuids::TypedUuid};

/// Session UUID
pub type SessionUuid = TypedUuid<IssuedSession>;

/// The user a request acts as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub uuid: UserUuid,
    pub email: String,
}

/// Raw credentials presented with a request.
///
/// The cookie session is tried first, then the bearer token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionCredentials {
    pub cookie: Option<String>,
    pub bearer: Option<String>,
}

impl SessionCredentials {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cookie.is_none() && self.bearer.is_none()
    }
}

/// Session persistence payload.
#[derive(Debug, Clone)]
pub(crate) struct NewSession {
    pub uuid: SessionUuid,
    pub user_uuid: UserUuid,
    pub token_hash: String,
    pub expires_at: Timestamp,
}

/// Session issuance result with the one-time raw token.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub uuid: SessionUuid,
    pub user_uuid: UserUuid,
    pub token: String,
    pub expires_at: Timestamp,
}
