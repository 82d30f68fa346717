//! Brand Directory

pub(crate) mod errors;
mod handlers;

pub(crate) use handlers::*;
