//! Submission Records

use crate::{
    domain::{
        baskets::records::{BasketItemUuid, BasketUuid},
        brands::records::BrandUuid,
        orders::records::OrderUuid,
        products::records::ProductUuid,
        users::records::UserUuid,
    },
    uuids::TypedUuid,
};

/// Token a submission stamps on the baskets it claims.
pub type ClaimUuid = TypedUuid<BasketClaim>;

/// Baskets held by one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasketClaim {
    pub uuid: ClaimUuid,
    pub baskets: Vec<BasketUuid>,
}

/// One basket item joined to its product and brand.
///
/// `product` is `None` when the product was deleted or the item never had one.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionLine {
    pub basket_uuid: BasketUuid,
    pub item_uuid: BasketItemUuid,
    pub product: Option<LineProduct>,
    pub quantity: u32,
    pub size: Option<String>,
    pub colour: Option<String>,
    pub notes: Option<String>,
    pub price: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineProduct {
    pub uuid: ProductUuid,
    /// `None` when the product's brand cannot be resolved.
    pub brand: Option<LineBrand>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBrand {
    pub uuid: BrandUuid,
    pub name: String,
    pub currency: String,
    pub owner_uuid: Option<UserUuid>,
}

/// An order created by a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedOrder {
    pub order_uuid: OrderUuid,
    pub brand_name: String,
    pub total: u64,
    pub currency: String,
    pub items_count: usize,
}

/// Outcome of a successful submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub orders: Vec<PlacedOrder>,
    pub notifications_sent: usize,
}
