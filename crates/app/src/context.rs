//! App Context

use std::sync::Arc;

use jiff::SignedDuration;
use thiserror::Error;

use crate::{
    auth::{AuthService, PgAuthService},
    database::{self, Db},
    domain::{
        baskets::{BasketsService, PgBasketsService},
        brands::{BrandsService, PgBrandsService},
        notifications::{NotificationsService, PgNotificationsService},
        orders::{OrdersService, PgOrdersService},
        products::{PgProductsService, ProductsService},
        submissions::{BasketSubmissionService, PgBasketSubmissionService},
        users::{PgUsersService, UsersService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub users: Arc<dyn UsersService>,
    pub brands: Arc<dyn BrandsService>,
    pub products: Arc<dyn ProductsService>,
    pub baskets: Arc<dyn BasketsService>,
    pub orders: Arc<dyn OrdersService>,
    pub notifications: Arc<dyn NotificationsService>,
    pub submissions: Arc<dyn BasketSubmissionService>,
    pub auth: Arc<dyn AuthService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// `claim_ttl` is how long a basket submission claim blocks retries.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(
        url: &str,
        claim_ttl: SignedDuration,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        let db = Db::new(pool.clone());

        Ok(Self {
            users: Arc::new(PgUsersService::new(db.clone())),
            brands: Arc::new(PgBrandsService::new(db.clone())),
            products: Arc::new(PgProductsService::new(db.clone())),
            baskets: Arc::new(PgBasketsService::new(db.clone())),
            orders: Arc::new(PgOrdersService::new(db.clone())),
            notifications: Arc::new(PgNotificationsService::new(db.clone())),
            submissions: Arc::new(PgBasketSubmissionService::new(db, claim_ttl)),
            auth: Arc::new(PgAuthService::new(pool)),
        })
    }
}
