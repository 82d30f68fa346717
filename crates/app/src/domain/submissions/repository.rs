//! Submissions Repository

use jiff::SignedDuration;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};
use uuid::Uuid;

use crate::{
    amounts::{try_get_amount, try_get_quantity},
    domain::{
        baskets::records::{BasketItemUuid, BasketUuid},
        brands::records::BrandUuid,
        products::records::ProductUuid,
        submissions::records::{ClaimUuid, LineBrand, LineProduct, SubmissionLine},
        users::records::UserUuid,
    },
};

const CLAIM_BASKETS_SQL: &str = include_str!("sql/claim_baskets.sql");
const HAS_ACTIVE_CLAIM_SQL: &str = include_str!("sql/has_active_claim.sql");
const GET_SUBMISSION_LINES_SQL: &str = include_str!("sql/get_submission_lines.sql");
const RELEASE_BASKETS_SQL: &str = include_str!("sql/release_baskets.sql");
const DELETE_BASKETS_SQL: &str = include_str!("sql/delete_baskets.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgSubmissionsRepository;

impl PgSubmissionsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Mark the user's open baskets, and claims older than `stale_after`, as
    /// submitting under `claim`.
    pub(crate) async fn claim_baskets(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        stale_after: SignedDuration,
        claim: ClaimUuid,
    ) -> Result<Vec<BasketUuid>, sqlx::Error> {
        let claimed: Vec<Uuid> = query_scalar(CLAIM_BASKETS_SQL)
            .bind(user.into_uuid())
            .bind(stale_after.as_secs())
            .bind(claim.into_uuid())
            .fetch_all(&mut **tx)
            .await?;

        Ok(claimed.into_iter().map(BasketUuid::from_uuid).collect())
    }

    pub(crate) async fn has_active_claim(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<bool, sqlx::Error> {
        query_scalar(HAS_ACTIVE_CLAIM_SQL)
            .bind(user.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    /// Items of `baskets` that are still held by `claim`.
    pub(crate) async fn get_submission_lines(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        baskets: &[BasketUuid],
        claim: ClaimUuid,
    ) -> Result<Vec<SubmissionLine>, sqlx::Error> {
        query_as::<Postgres, SubmissionLine>(GET_SUBMISSION_LINES_SQL)
            .bind(into_uuids(baskets))
            .bind(claim.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    /// Reopen baskets still held by `claim`.
    pub(crate) async fn release_baskets(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        baskets: &[BasketUuid],
        claim: ClaimUuid,
    ) -> Result<u64, sqlx::Error> {
        let result = query(RELEASE_BASKETS_SQL)
            .bind(into_uuids(baskets))
            .bind(claim.into_uuid())
            .execute(&mut **tx)
            .await?;

        Ok(result.rows_affected())
    }

    /// Delete baskets still held by `claim`, cascading to their items.
    pub(crate) async fn delete_baskets(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        baskets: &[BasketUuid],
        claim: ClaimUuid,
    ) -> Result<u64, sqlx::Error> {
        let result = query(DELETE_BASKETS_SQL)
            .bind(into_uuids(baskets))
            .bind(claim.into_uuid())
            .execute(&mut **tx)
            .await?;

        Ok(result.rows_affected())
    }
}

fn into_uuids(baskets: &[BasketUuid]) -> Vec<Uuid> {
    baskets.iter().copied().map(BasketUuid::into_uuid).collect()
}

impl<'r> FromRow<'r, PgRow> for SubmissionLine {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let brand = match row.try_get::<Option<Uuid>, _>("brand_uuid")? {
            Some(uuid) => Some(LineBrand {
                uuid: BrandUuid::from_uuid(uuid),
                name: row.try_get("brand_name")?,
                currency: row.try_get("brand_currency")?,
                owner_uuid: row
                    .try_get::<Option<Uuid>, _>("brand_owner_uuid")?
                    .map(UserUuid::from_uuid),
            }),
            None => None,
        };

        let product = row
            .try_get::<Option<Uuid>, _>("product_uuid")?
            .map(|uuid| LineProduct {
                uuid: ProductUuid::from_uuid(uuid),
                brand,
            });

        Ok(Self {
            basket_uuid: BasketUuid::from_uuid(row.try_get("basket_uuid")?),
            item_uuid: BasketItemUuid::from_uuid(row.try_get("item_uuid")?),
            product,
            quantity: try_get_quantity(row, "quantity")?,
            size: row.try_get("size")?,
            colour: row.try_get("colour")?,
            notes: row.try_get("notes")?,
            price: try_get_amount(row, "price")?,
        })
    }
}
