//! Auth service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use sqlx::PgPool;
use tracing::debug;

use crate::{
    auth::{
        AuthServiceError, AuthenticatedUser, IssuedSession, SessionCredentials, SessionUuid,
        format_session_token, generate_session_secret, hash_session_secret, models::NewSession,
        parse_session_token, repository::PgAuthRepository,
    },
    domain::users::records::UserUuid,
};

#[derive(Debug, Clone)]
pub struct PgAuthService {
    repository: PgAuthRepository,
}

impl PgAuthService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PgAuthRepository::new(pool),
        }
    }

    /// Issue a new session for the given user.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insertion fails.
    pub async fn issue_session(
        &self,
        user: UserUuid,
        expires_at: Timestamp,
    ) -> Result<IssuedSession, AuthServiceError> {
        let uuid = SessionUuid::new();
        let secret = generate_session_secret();
        let token = format_session_token(&secret);

        self.repository
            .create_session(&NewSession {
                uuid,
                user_uuid: user,
                token_hash: hash_session_secret(&secret),
                expires_at,
            })
            .await?;

        Ok(IssuedSession {
            uuid,
            user_uuid: user,
            token,
            expires_at,
        })
    }

    /// Revoke a session by its raw token. Returns `true` if the session was active.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is malformed or the database query fails.
    pub async fn revoke_session(&self, token: &str) -> Result<bool, AuthServiceError> {
        let secret = parse_session_token(token)?;

        let revoked = self
            .repository
            .revoke_session(&hash_session_secret(&secret))
            .await?;

        Ok(revoked > 0)
    }

    async fn lookup(&self, token: &str) -> Result<AuthenticatedUser, AuthServiceError> {
        let secret = parse_session_token(token).map_err(|_| AuthServiceError::NotFound)?;

        self.repository
            .find_session_user_by_token_hash(&hash_session_secret(&secret))
            .await?
            .ok_or(AuthServiceError::NotFound)
    }
}

#[async_trait]
impl AuthService for PgAuthService {
    async fn authenticate(
        &self,
        credentials: SessionCredentials,
    ) -> Result<AuthenticatedUser, AuthServiceError> {
        if let Some(cookie) = credentials.cookie.as_deref() {
            match self.lookup(cookie).await {
                Ok(user) => return Ok(user),
                Err(error @ AuthServiceError::Sql(_)) if credentials.bearer.is_none() => {
                    return Err(error);
                }
                Err(error) => debug!(%error, "cookie session rejected, trying bearer token"),
            }
        }

        let bearer = credentials.bearer.ok_or(AuthServiceError::NotFound)?;

        self.lookup(&bearer).await
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Resolve the acting user from a session cookie or bearer token.
    async fn authenticate(
        &self,
        credentials: SessionCredentials,
    ) -> Result<AuthenticatedUser, AuthServiceError>;
}
