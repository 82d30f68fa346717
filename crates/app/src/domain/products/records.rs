//! Product Records

use jiff::Timestamp;

use crate::{domain::brands::records::BrandUuid, uuids::TypedUuid};

/// Product UUID
pub type ProductUuid = TypedUuid<ProductRecord>;

/// Product Record
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub uuid: ProductUuid,
    pub brand_uuid: BrandUuid,
    pub title: String,
    pub category: Option<String>,
    pub price: u64,
    pub sale_price: Option<u64>,
    pub image_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

impl ProductRecord {
    /// The price a shopper pays right now: the sale price when one is set.
    #[must_use]
    pub fn effective_price(&self) -> u64 {
        self.sale_price.unwrap_or(self.price)
    }
}
