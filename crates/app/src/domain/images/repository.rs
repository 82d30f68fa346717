//! Images Repository

use sqlx::{Postgres, Transaction, query, query_scalar};
use uuid::Uuid;

use crate::domain::images::records::{ImageTarget, ReassignmentBatchUuid};

const GET_BRAND_IMAGE_SQL: &str = include_str!("sql/get_brand_image.sql");
const GET_PRODUCT_IMAGE_SQL: &str = include_str!("sql/get_product_image.sql");
const SET_BRAND_IMAGE_SQL: &str = include_str!("sql/set_brand_image.sql");
const SET_PRODUCT_IMAGE_SQL: &str = include_str!("sql/set_product_image.sql");
const CREATE_IMAGE_REASSIGNMENT_SQL: &str = include_str!("sql/create_image_reassignment.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgImagesRepository;

impl PgImagesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Lock the target row and return its image URL, `None` when the row is missing.
    pub(crate) async fn get_current_image(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        target: ImageTarget,
        uuid: Uuid,
    ) -> Result<Option<Option<String>>, sqlx::Error> {
        let sql = match target {
            ImageTarget::Brand => GET_BRAND_IMAGE_SQL,
            ImageTarget::Product => GET_PRODUCT_IMAGE_SQL,
        };

        query_scalar::<Postgres, Option<String>>(sql)
            .bind(uuid)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn set_image(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        target: ImageTarget,
        uuid: Uuid,
        image_url: &str,
    ) -> Result<(), sqlx::Error> {
        let sql = match target {
            ImageTarget::Brand => SET_BRAND_IMAGE_SQL,
            ImageTarget::Product => SET_PRODUCT_IMAGE_SQL,
        };

        query(sql)
            .bind(uuid)
            .bind(image_url)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn create_reassignment(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        batch: ReassignmentBatchUuid,
        target: ImageTarget,
        uuid: Uuid,
        previous_url: Option<&str>,
        new_url: &str,
    ) -> Result<(), sqlx::Error> {
        query(CREATE_IMAGE_REASSIGNMENT_SQL)
            .bind(Uuid::now_v7())
            .bind(batch.into_uuid())
            .bind(target.as_str())
            .bind(uuid)
            .bind(previous_url)
            .bind(new_url)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }
}
