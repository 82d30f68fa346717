//! Shared application domain and persistence modules.

pub(crate) mod amounts;
pub mod auth;
pub mod context;
pub mod database;
pub mod domain;

#[cfg(test)]
mod test;

pub mod uuids;
