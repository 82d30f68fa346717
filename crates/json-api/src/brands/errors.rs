//! Brand and catalogue error mapping.

use tracing::error;

use omahub_app::domain::{brands::BrandsServiceError, products::ProductsServiceError};

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: BrandsServiceError) -> ApiError {
    match error {
        BrandsServiceError::NotFound => ApiError::not_found("Brand not found"),
        BrandsServiceError::UnknownOwner | BrandsServiceError::InvalidData => {
            ApiError::bad_request("Invalid brand")
        }
        BrandsServiceError::Sql(source) => {
            error!("brand storage error: {source}");

            ApiError::internal()
        }
    }
}

pub(crate) fn catalogue_error(error: ProductsServiceError) -> ApiError {
    match error {
        ProductsServiceError::NotFound => ApiError::not_found("Product not found"),
        ProductsServiceError::UnknownBrand => ApiError::not_found("Brand not found"),
        ProductsServiceError::Duplicate | ProductsServiceError::InvalidData => {
            ApiError::bad_request("Invalid product")
        }
        ProductsServiceError::Sql(source) => {
            error!("product storage error: {source}");

            ApiError::internal()
        }
    }
}
