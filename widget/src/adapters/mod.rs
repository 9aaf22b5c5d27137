//! Adapters layer
//!
//! Concrete implementations of the domain port traits.
//! - `memory`: In-process, capacity-bounded stores

pub mod memory;

pub use memory::{InMemoryFeedRepository, InMemoryThoughtRepository};
