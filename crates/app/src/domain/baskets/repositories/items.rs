//! Basket Items Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};
use uuid::Uuid;

use crate::{
    amounts::{quantity_to_i32, try_get_amount, try_get_quantity},
    domain::{
        baskets::{
            data::NewBasketItem,
            records::{BasketItemRecord, BasketItemUuid, BasketUuid},
        },
        products::records::ProductUuid,
    },
};

const GET_BASKET_ITEMS_SQL: &str = include_str!("../sql/get_basket_items.sql");
const CREATE_BASKET_ITEM_SQL: &str = include_str!("../sql/create_basket_item.sql");
const DELETE_BASKET_ITEM_SQL: &str = include_str!("../sql/delete_basket_item.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgBasketItemsRepository;

impl PgBasketItemsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn get_basket_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        basket: BasketUuid,
    ) -> Result<Vec<BasketItemRecord>, sqlx::Error> {
        query_as::<Postgres, BasketItemRecord>(GET_BASKET_ITEMS_SQL)
            .bind(basket.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    /// Insert an item priced from the live catalogue.
    ///
    /// Fails with `RowNotFound` when the product is unknown or deleted.
    pub(crate) async fn create_basket_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        basket: BasketUuid,
        item: NewBasketItem,
    ) -> Result<BasketItemRecord, sqlx::Error> {
        query_as::<Postgres, BasketItemRecord>(CREATE_BASKET_ITEM_SQL)
            .bind(item.uuid.into_uuid())
            .bind(basket.into_uuid())
            .bind(item.product_uuid.into_uuid())
            .bind(quantity_to_i32(item.quantity, "quantity")?)
            .bind(item.size)
            .bind(item.colour)
            .bind(item.notes)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_basket_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        basket: BasketUuid,
        item: BasketItemUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_BASKET_ITEM_SQL)
            .bind(item.into_uuid())
            .bind(basket.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for BasketItemRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: BasketItemUuid::from_uuid(row.try_get("uuid")?),
            basket_uuid: BasketUuid::from_uuid(row.try_get("basket_uuid")?),
            product_uuid: row
                .try_get::<Option<Uuid>, _>("product_uuid")?
                .map(ProductUuid::from_uuid),
            quantity: try_get_quantity(row, "quantity")?,
            size: row.try_get("size")?,
            colour: row.try_get("colour")?,
            notes: row.try_get("notes")?,
            price: try_get_amount(row, "price")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
