//! Basket Records

use std::{fmt, str::FromStr};

use jiff::Timestamp;

use crate::{
    domain::{products::records::ProductUuid, users::records::UserUuid},
    uuids::TypedUuid,
};

/// Basket UUID
pub type BasketUuid = TypedUuid<BasketRecord>;

/// Basket lifecycle state.
///
/// A basket is `Submitting` while an order submission has claimed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BasketStatus {
    Open,
    Submitting,
}

impl BasketStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Submitting => "submitting",
        }
    }
}

impl fmt::Display for BasketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownBasketStatus(pub String);

impl fmt::Display for UnknownBasketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown basket status: {}", self.0)
    }
}

impl std::error::Error for UnknownBasketStatus {}

impl FromStr for BasketStatus {
    type Err = UnknownBasketStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "open" => Ok(Self::Open),
            "submitting" => Ok(Self::Submitting),
            other => Err(UnknownBasketStatus(other.to_string())),
        }
    }
}

/// Basket Record
#[derive(Debug, Clone, PartialEq)]
pub struct BasketRecord {
    pub uuid: BasketUuid,
    pub user_uuid: UserUuid,
    pub status: BasketStatus,
    pub items: Vec<BasketItemRecord>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl BasketRecord {
    /// Sum of every line's `price * quantity`.
    #[must_use]
    pub fn subtotal(&self) -> u64 {
        self.items.iter().map(BasketItemRecord::line_total).sum()
    }
}

/// Basket Item UUID
pub type BasketItemUuid = TypedUuid<BasketItemRecord>;

/// Basket Item Record
#[derive(Debug, Clone, PartialEq)]
pub struct BasketItemRecord {
    pub uuid: BasketItemUuid,
    pub basket_uuid: BasketUuid,
    /// `None` once the product has been removed from the catalogue.
    pub product_uuid: Option<ProductUuid>,
    pub quantity: u32,
    pub size: Option<String>,
    pub colour: Option<String>,
    pub notes: Option<String>,
    /// Unit price captured when the item was added.
    pub price: u64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl BasketItemRecord {
    #[must_use]
    pub fn line_total(&self) -> u64 {
        self.price.saturating_mul(u64::from(self.quantity))
    }
}
