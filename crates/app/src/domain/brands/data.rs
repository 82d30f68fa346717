//! Brand Data

use crate::domain::{brands::records::BrandUuid, users::records::UserUuid};

/// New Brand Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewBrand {
    pub uuid: BrandUuid,
    pub name: String,
    pub currency: String,
    pub owner_uuid: Option<UserUuid>,
    pub image_url: Option<String>,
}
