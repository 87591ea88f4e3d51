//! HTTP API test suite.
//!
//! Each test runs against its own in-memory SQLite database, migrated with
//! the real migrator.
//!
//! Run with: cargo test --test api

mod test_helpers;

mod test_cases;
mod test_catalog;
mod test_errors;
mod test_runs;
mod test_steps;
