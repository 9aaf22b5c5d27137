//! Test utilities
//!
//! Fixtures for unit tests. Services are exercised against the real
//! in-memory adapters, so no mocks are needed.

pub mod fixtures;

pub use fixtures::*;
