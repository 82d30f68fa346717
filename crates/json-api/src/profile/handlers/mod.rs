//! Profile Handlers

pub(crate) mod get;
pub(crate) mod update;
