//! Test Module
//!
//! Cross-module test suite for the prompt improver backend.
//!
//! ## Test Categories
//! - `brain_tests`: classification priority and brief properties
//! - `database_tests`: prompt persistence
//! - `server_tests`: HTTP round-trips through the router

pub mod brain_tests;

use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

/// In-memory database with the schema applied.
///
/// A single connection keeps the in-memory database alive for the whole pool.
pub(crate) async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test pool");

    crate::database::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}
