//! Brands service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::brands::{
        data::NewBrand,
        errors::BrandsServiceError,
        records::{BrandRecord, BrandUuid},
        repository::PgBrandsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgBrandsService {
    db: Db,
    repository: PgBrandsRepository,
}

impl PgBrandsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgBrandsRepository::new(),
        }
    }
}

#[async_trait]
impl BrandsService for PgBrandsService {
    async fn list_brands(&self) -> Result<Vec<BrandRecord>, BrandsServiceError> {
        let mut tx = self.db.begin().await?;

        let brands = self.repository.list_brands(&mut tx).await?;

        tx.commit().await?;

        Ok(brands)
    }

    async fn get_brand(&self, brand: BrandUuid) -> Result<BrandRecord, BrandsServiceError> {
        let mut tx = self.db.begin().await?;

        let brand = self.repository.get_brand(&mut tx, brand).await?;

        tx.commit().await?;

        Ok(brand)
    }

    async fn create_brand(&self, brand: NewBrand) -> Result<BrandRecord, BrandsServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self.repository.create_brand(&mut tx, brand).await?;

        tx.commit().await?;

        Ok(created)
    }
}

#[automock]
#[async_trait]
pub trait BrandsService: Send + Sync {
    /// Retrieves the brand directory.
    async fn list_brands(&self) -> Result<Vec<BrandRecord>, BrandsServiceError>;

    /// Retrieve a single brand.
    async fn get_brand(&self, brand: BrandUuid) -> Result<BrandRecord, BrandsServiceError>;

    /// Registers a new brand.
    async fn create_brand(&self, brand: NewBrand) -> Result<BrandRecord, BrandsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{domain::users::records::UserUuid, test::TestContext};

    use super::*;

    fn new_brand(name: &str, currency: &str) -> NewBrand {
        NewBrand {
            uuid: BrandUuid::new(),
            name: name.to_string(),
            currency: currency.to_string(),
            owner_uuid: None,
            image_url: None,
        }
    }

    #[tokio::test]
    async fn create_brand_returns_created_brand() -> TestResult {
        let ctx = TestContext::new().await;
        let owner = ctx.create_user("designer@example.com").await;

        let brand = ctx
            .brands
            .create_brand(NewBrand {
                owner_uuid: Some(owner),
                ..new_brand("Adire House", "NGN")
            })
            .await?;

        assert_eq!(brand.name, "Adire House");
        assert_eq!(brand.currency, "NGN");
        assert_eq!(brand.owner_uuid, Some(owner));

        Ok(())
    }

    #[tokio::test]
    async fn create_brand_with_invalid_currency_returns_invalid_data() {
        let ctx = TestContext::new().await;

        let result = ctx
            .brands
            .create_brand(new_brand("Adire House", "naira"))
            .await;

        assert!(
            matches!(result, Err(BrandsServiceError::InvalidData)),
            "expected InvalidData, got {result:?}"
        );
    }

    #[tokio::test]
    async fn create_brand_with_unknown_owner_returns_unknown_owner() {
        let ctx = TestContext::new().await;

        let result = ctx
            .brands
            .create_brand(NewBrand {
                owner_uuid: Some(UserUuid::new()),
                ..new_brand("Adire House", "NGN")
            })
            .await;

        assert!(
            matches!(result, Err(BrandsServiceError::UnknownOwner)),
            "expected UnknownOwner, got {result:?}"
        );
    }

    #[tokio::test]
    async fn get_brand_unknown_uuid_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.brands.get_brand(BrandUuid::new()).await;

        assert!(
            matches!(result, Err(BrandsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn list_brands_is_sorted_by_name() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.brands.create_brand(new_brand("Kente Co", "GHS")).await?;
        ctx.brands
            .create_brand(new_brand("Adire House", "NGN"))
            .await?;

        let names: Vec<String> = ctx
            .brands
            .list_brands()
            .await?
            .into_iter()
            .map(|brand| brand.name)
            .collect();

        assert_eq!(names, vec!["Adire House", "Kente Co"]);

        Ok(())
    }
}
