//! Products Data

use crate::domain::{brands::records::BrandUuid, products::records::ProductUuid};

/// New Product Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub uuid: ProductUuid,
    pub brand_uuid: BrandUuid,
    pub title: String,
    pub category: Option<String>,
    pub price: u64,
    pub sale_price: Option<u64>,
    pub image_url: Option<String>,
}
