//! Shared test infrastructure: hermetic in-memory application instances.

pub mod database;

#[allow(unused_imports)]
pub use database::{build_app, spawn_app, test_settings, TestApp};
