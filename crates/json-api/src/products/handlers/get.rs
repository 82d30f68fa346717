//! Get Product Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use omahub_app::domain::products::records::{ProductRecord, ProductUuid};

use crate::{brands::errors::catalogue_error, errors::ApiError, extensions::*, state::State};

/// Product Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    pub uuid: Uuid,
    pub brand_uuid: Uuid,
    pub title: String,
    pub category: Option<String>,

    /// List price in minor units
    pub price: u64,

    pub sale_price: Option<u64>,

    /// What a shopper pays right now
    pub current_price: u64,

    pub image_url: Option<String>,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        Self {
            current_price: product.effective_price(),
            uuid: product.uuid.into_uuid(),
            brand_uuid: product.brand_uuid.into_uuid(),
            title: product.title,
            category: product.category,
            price: product.price,
            sale_price: product.sale_price,
            image_url: product.image_url,
        }
    }
}

/// Get Product Handler
#[endpoint(
    tags("products"),
    summary = "Get Product",
    security(("bearer_auth" = []), ("session_cookie" = []))
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state
        .app
        .products
        .get_product(ProductUuid::from_uuid(product.into_inner()))
        .await
        .map_err(catalogue_error)?;

    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use omahub_app::domain::{
        brands::records::BrandUuid,
        products::{MockProductsService, ProductsServiceError},
    };

    use crate::test_helpers::{app_service, make_product, mock_app};

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        let mut app = mock_app();

        app.products = Arc::new(products);

        app_service(
            app,
            Router::with_path("api/products/{product}").get(handler),
        )
    }

    #[tokio::test]
    async fn test_get_reports_sale_price_as_current() -> TestResult {
        let mut products = MockProductsService::new();
        let uuid = ProductUuid::new();

        let mut product = make_product(uuid, BrandUuid::new(), 10_000);
        product.sale_price = Some(7_500);

        products
            .expect_get_product()
            .once()
            .withf(move |p| *p == uuid)
            .return_once(move |_| Ok(product));

        let mut res = TestClient::get(format!("http://example.com/api/products/{uuid}"))
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: ProductResponse = res.take_json().await?;

        assert_eq!(body.price, 10_000);
        assert_eq!(body.current_price, 7_500);

        Ok(())
    }

    #[tokio::test]
    async fn test_deleted_product_returns_404() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_get_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::NotFound));

        let uuid = Uuid::now_v7();

        let res = TestClient::get(format!("http://example.com/api/products/{uuid}"))
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
