//! Brand Handlers

pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod products;
