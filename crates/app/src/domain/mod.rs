//! OmaHub Domain Concerns

pub mod baskets;
pub mod brands;
pub mod images;
pub mod notifications;
pub mod orders;
pub mod products;
pub mod submissions;
pub mod users;
