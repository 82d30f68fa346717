//! Basket Submissions
//!
//! Turns a customer's baskets into one order per brand.

mod customer;
pub mod errors;
mod grouping;
mod placement;
pub mod records;
mod repository;
pub mod service;
mod writer;

pub use errors::BasketSubmissionError;
pub use service::*;
