//! Test case manager library.
//!
//! Stores products, releases, test cases, steps and test runs, and keeps the
//! relations between them consistent (case platforms, related cases, run
//! membership).

pub mod api;
pub mod config;
pub mod db;
pub mod entity;
pub mod error;
pub mod middleware;
pub mod migration;
pub mod models;
pub mod services;
