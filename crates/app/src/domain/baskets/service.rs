//! Baskets service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        baskets::{
            data::NewBasketItem,
            errors::BasketsServiceError,
            records::{BasketItemRecord, BasketItemUuid, BasketRecord, BasketUuid},
            repositories::{PgBasketItemsRepository, PgBasketsRepository},
        },
        users::records::UserUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgBasketsService {
    db: Db,
    baskets_repository: PgBasketsRepository,
    items_repository: PgBasketItemsRepository,
}

impl PgBasketsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            baskets_repository: PgBasketsRepository::new(),
            items_repository: PgBasketItemsRepository::new(),
        }
    }
}

#[async_trait]
impl BasketsService for PgBasketsService {
    async fn get_basket(&self, user: UserUuid) -> Result<BasketRecord, BasketsServiceError> {
        let mut tx = self.db.begin_user_transaction(user).await?;

        let mut basket = self
            .baskets_repository
            .find_open_basket(&mut tx, user)
            .await?
            .ok_or(BasketsServiceError::NotFound)?;

        let items = self
            .items_repository
            .get_basket_items(&mut tx, basket.uuid)
            .await?;

        tx.commit().await?;

        basket.items.extend(items);

        Ok(basket)
    }

    async fn add_item(
        &self,
        user: UserUuid,
        item: NewBasketItem,
    ) -> Result<BasketItemRecord, BasketsServiceError> {
        let mut tx = self.db.begin_user_transaction(user).await?;

        let basket = match self
            .baskets_repository
            .lock_open_basket(&mut tx, user)
            .await?
        {
            Some(basket) => basket,
            None => {
                self.baskets_repository
                    .create_basket(&mut tx, BasketUuid::new(), user)
                    .await?
            }
        };

        let item = self
            .items_repository
            .create_basket_item(&mut tx, basket.uuid, item)
            .await?;

        tx.commit().await?;

        Ok(item)
    }

    async fn remove_item(
        &self,
        user: UserUuid,
        item: BasketItemUuid,
    ) -> Result<(), BasketsServiceError> {
        let mut tx = self.db.begin_user_transaction(user).await?;

        let basket = self
            .baskets_repository
            .lock_item_basket(&mut tx, user, item)
            .await?
            .ok_or(BasketsServiceError::NotFound)?;

        let rows_affected = self
            .items_repository
            .delete_basket_item(&mut tx, basket.uuid, item)
            .await?;

        if rows_affected == 0 {
            return Err(BasketsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait BasketsService: Send + Sync {
    /// Retrieve the user's open basket with its items.
    async fn get_basket(&self, user: UserUuid) -> Result<BasketRecord, BasketsServiceError>;

    /// Add an item to the user's open basket, creating the basket on first use.
    async fn add_item(
        &self,
        user: UserUuid,
        item: NewBasketItem,
    ) -> Result<BasketItemRecord, BasketsServiceError>;

    /// Remove an item from the user's open basket.
    async fn remove_item(
        &self,
        user: UserUuid,
        item: BasketItemUuid,
    ) -> Result<(), BasketsServiceError>;
}
