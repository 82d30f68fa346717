//! Test infrastructure shared by service tests.

mod db;
mod helpers;

pub(crate) use context::TestContext;
