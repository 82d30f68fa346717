//! Customer details copied onto orders.

use crate::domain::users::records::ProfileRecord;

const FALLBACK_NAME: &str = "Customer";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Customer {
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) phone: Option<String>,
    pub(crate) address: Option<String>,
}

impl Customer {
    pub(crate) fn from_profile(profile: ProfileRecord, email: &str) -> Self {
        Self {
            name: display_name(profile.full_name.as_deref(), email),
            email: email.to_string(),
            phone: non_blank(profile.phone),
            address: non_blank(profile.address),
        }
    }
}

/// Full name, else the email's local part, else `"Customer"`. Blank values count as missing.
pub(crate) fn display_name(full_name: Option<&str>, email: &str) -> String {
    full_name
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .or_else(|| {
            let local = email
                .split_once('@')
                .map_or(email, |(local, _)| local)
                .trim();

            (!local.is_empty()).then_some(local)
        })
        .unwrap_or(FALLBACK_NAME)
        .to_string()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}
