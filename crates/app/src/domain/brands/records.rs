//! Brand Records

use jiff::Timestamp;

use crate::{domain::users::records::UserUuid, uuids::TypedUuid};

/// Brand UUID
pub type BrandUuid = TypedUuid<BrandRecord>;

/// Brand Record
#[derive(Debug, Clone, PartialEq)]
pub struct BrandRecord {
    pub uuid: BrandUuid,
    pub name: String,
    /// ISO-4217 code every order for this brand is placed in.
    pub currency: String,
    /// The designer who receives order notifications, if the brand is claimed.
    pub owner_uuid: Option<UserUuid>,
    pub image_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
