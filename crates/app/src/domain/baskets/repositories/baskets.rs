//! Baskets Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::{
    baskets::records::{BasketItemUuid, BasketRecord, BasketStatus, BasketUuid},
    users::records::UserUuid,
};

const FIND_OPEN_BASKET_SQL: &str = include_str!("../sql/find_open_basket.sql");
const LOCK_OPEN_BASKET_SQL: &str = include_str!("../sql/lock_open_basket.sql");
const LOCK_ITEM_BASKET_SQL: &str = include_str!("../sql/lock_item_basket.sql");
const CREATE_BASKET_SQL: &str = include_str!("../sql/create_basket.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgBasketsRepository;

impl PgBasketsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn find_open_basket(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<Option<BasketRecord>, sqlx::Error> {
        query_as::<Postgres, BasketRecord>(FIND_OPEN_BASKET_SQL)
            .bind(user.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    /// Like `find_open_basket`, but holds the row until the transaction ends.
    ///
    /// A submission claiming the basket waits for the lock, and a basket
    /// claimed while we waited is skipped.
    pub(crate) async fn lock_open_basket(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<Option<BasketRecord>, sqlx::Error> {
        query_as::<Postgres, BasketRecord>(LOCK_OPEN_BASKET_SQL)
            .bind(user.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    /// Lock the open basket holding `item`.
    ///
    /// `None` when the item is unknown, belongs to someone else or sits in a
    /// basket that a submission has claimed.
    pub(crate) async fn lock_item_basket(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        item: BasketItemUuid,
    ) -> Result<Option<BasketRecord>, sqlx::Error> {
        query_as::<Postgres, BasketRecord>(LOCK_ITEM_BASKET_SQL)
            .bind(item.into_uuid())
            .bind(user.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn create_basket(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        basket: BasketUuid,
        user: UserUuid,
    ) -> Result<BasketRecord, sqlx::Error> {
        query_as::<Postgres, BasketRecord>(CREATE_BASKET_SQL)
            .bind(basket.into_uuid())
            .bind(user.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for BasketRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let status: String = row.try_get("status")?;

        let status = status
            .parse::<BasketStatus>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "status".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            uuid: BasketUuid::from_uuid(row.try_get("uuid")?),
            user_uuid: UserUuid::from_uuid(row.try_get("user_uuid")?),
            status,
            items: Vec::new(),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
