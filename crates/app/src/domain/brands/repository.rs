//! Brands Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};
use uuid::Uuid;

use crate::domain::{
    brands::{
        data::NewBrand,
        records::{BrandRecord, BrandUuid},
    },
    users::records::UserUuid,
};

const LIST_BRANDS_SQL: &str = include_str!("sql/list_brands.sql");
const GET_BRAND_SQL: &str = include_str!("sql/get_brand.sql");
const CREATE_BRAND_SQL: &str = include_str!("sql/create_brand.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgBrandsRepository;

impl PgBrandsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_brands(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<BrandRecord>, sqlx::Error> {
        query_as::<Postgres, BrandRecord>(LIST_BRANDS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_brand(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        brand: BrandUuid,
    ) -> Result<BrandRecord, sqlx::Error> {
        query_as::<Postgres, BrandRecord>(GET_BRAND_SQL)
            .bind(brand.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_brand(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        brand: NewBrand,
    ) -> Result<BrandRecord, sqlx::Error> {
        query_as::<Postgres, BrandRecord>(CREATE_BRAND_SQL)
            .bind(brand.uuid.into_uuid())
            .bind(brand.name)
            .bind(brand.currency)
            .bind(brand.owner_uuid.map(UserUuid::into_uuid))
            .bind(brand.image_url)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for BrandRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: BrandUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            currency: row.try_get("currency")?,
            owner_uuid: row
                .try_get::<Option<Uuid>, _>("owner_uuid")?
                .map(UserUuid::from_uuid),
            image_url: row.try_get("image_url")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
