//! Image Reassignment
//!
//! Batch repair of brand and product image URLs from a mapping file.

pub mod data;
pub mod errors;
mod planning;
pub mod records;
mod repository;
pub mod service;

pub use errors::ImagesServiceError;
pub use service::*;
