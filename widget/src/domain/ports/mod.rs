//! Domain ports (traits)
//!
//! Port traits define the storage the services need.
//! Adapters provide concrete implementations of these traits.

pub mod repositories;

pub use repositories::{FeedRepository, ThoughtRepository};
