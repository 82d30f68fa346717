//! Users service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::users::{
        data::{NewUser, ProfileUpdate},
        errors::UsersServiceError,
        records::{ProfileRecord, UserRecord, UserUuid},
        repository::PgUsersRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgUsersService {
    db: Db,
    repository: PgUsersRepository,
}

impl PgUsersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgUsersRepository::new(),
        }
    }
}

#[async_trait]
impl UsersService for PgUsersService {
    async fn create_user(&self, user: NewUser) -> Result<UserRecord, UsersServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self.repository.create_user(&mut tx, user).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn get_user(&self, user: UserUuid) -> Result<UserRecord, UsersServiceError> {
        let mut tx = self.db.begin().await?;

        let user = self.repository.get_user(&mut tx, user).await?;

        tx.commit().await?;

        Ok(user)
    }

    async fn get_profile(&self, user: UserUuid) -> Result<ProfileRecord, UsersServiceError> {
        let mut tx = self.db.begin_user_transaction(user).await?;

        let profile = self.repository.get_profile(&mut tx, user).await?;

        tx.commit().await?;

        Ok(profile)
    }

    async fn upsert_profile(
        &self,
        user: UserUuid,
        update: ProfileUpdate,
    ) -> Result<ProfileRecord, UsersServiceError> {
        let mut tx = self.db.begin_user_transaction(user).await?;

        let profile = self.repository.upsert_profile(&mut tx, user, update).await?;

        tx.commit().await?;

        Ok(profile)
    }
}

#[automock]
#[async_trait]
pub trait UsersService: Send + Sync {
    /// Creates a new user account.
    async fn create_user(&self, user: NewUser) -> Result<UserRecord, UsersServiceError>;

    /// Retrieve a single user.
    async fn get_user(&self, user: UserUuid) -> Result<UserRecord, UsersServiceError>;

    /// Retrieve the user's own profile.
    async fn get_profile(&self, user: UserUuid) -> Result<ProfileRecord, UsersServiceError>;

    /// Creates or replaces the user's profile.
    async fn upsert_profile(
        &self,
        user: UserUuid,
        update: ProfileUpdate,
    ) -> Result<ProfileRecord, UsersServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::TestContext;

    use super::*;

    #[tokio::test]
    async fn create_user_returns_correct_uuid_and_email() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = UserUuid::new();

        let user = ctx
            .users
            .create_user(NewUser {
                uuid,
                email: "ada@example.com".to_string(),
            })
            .await?;

        assert_eq!(user.uuid, uuid);
        assert_eq!(user.email, "ada@example.com");

        Ok(())
    }

    #[tokio::test]
    async fn create_user_duplicate_email_returns_already_exists() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.users
            .create_user(NewUser {
                uuid: UserUuid::new(),
                email: "ada@example.com".to_string(),
            })
            .await?;

        let result = ctx
            .users
            .create_user(NewUser {
                uuid: UserUuid::new(),
                email: "ada@example.com".to_string(),
            })
            .await;

        assert!(
            matches!(result, Err(UsersServiceError::EmailTaken)),
            "expected EmailTaken, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn get_profile_without_profile_returns_not_found() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.create_user("ada@example.com").await;

        let result = ctx.users.get_profile(user).await;

        assert!(
            matches!(result, Err(UsersServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn upsert_profile_replaces_existing_values() -> TestResult {
        let ctx = TestContext::new().await;
        let user = ctx.create_user("ada@example.com").await;

        ctx.users
            .upsert_profile(
                user,
                ProfileUpdate {
                    full_name: Some("Ada Obi".to_string()),
                    phone: Some("+234 800 000 0000".to_string()),
                    address: None,
                },
            )
            .await?;

        let profile = ctx
            .users
            .upsert_profile(
                user,
                ProfileUpdate {
                    full_name: Some("Ada Obi-Eze".to_string()),
                    phone: None,
                    address: Some("12 Broad Street, Lagos".to_string()),
                },
            )
            .await?;

        assert_eq!(profile.user_uuid, user);
        assert_eq!(profile.full_name.as_deref(), Some("Ada Obi-Eze"));
        assert_eq!(profile.phone, None);
        assert_eq!(profile.address.as_deref(), Some("12 Broad Street, Lagos"));

        Ok(())
    }

    #[tokio::test]
    async fn profile_not_visible_to_other_user() -> TestResult {
        let ctx = TestContext::new().await;
        let owner = ctx.create_user("ada@example.com").await;
        let other = ctx.create_user("bola@example.com").await;

        ctx.users
            .upsert_profile(owner, ProfileUpdate::default())
            .await?;

        let mut tx = ctx.app_db.begin_user_transaction(other).await?;

        let visible: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM profiles")
            .fetch_one(&mut *tx)
            .await?;

        assert_eq!(visible, 0, "other user should not see the owner's profile");

        Ok(())
    }
}
