//! Basket Data

use crate::domain::{baskets::records::BasketItemUuid, products::records::ProductUuid};

/// New Basket Item Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewBasketItem {
    pub uuid: BasketItemUuid,
    pub product_uuid: ProductUuid,
    pub quantity: u32,
    pub size: Option<String>,
    pub colour: Option<String>,
    pub notes: Option<String>,
}
