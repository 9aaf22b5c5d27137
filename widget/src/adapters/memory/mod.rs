//! In-memory adapters
//!
//! Nothing the widget records outlives the process, so these are the only
//! storage implementations.

mod feed_repo;
mod thought_repo;

pub use feed_repo::InMemoryFeedRepository;
pub use thought_repo::InMemoryThoughtRepository;

use std::collections::VecDeque;

use crate::error::DomainError;

/// Push to the front and evict from the back once `capacity` is exceeded
fn push_bounded<T>(items: &mut VecDeque<T>, item: T, capacity: usize) -> Option<T> {
    items.push_front(item);
    if items.len() > capacity {
        items.pop_back()
    } else {
        None
    }
}

fn poisoned<E>(_: E) -> DomainError {
    DomainError::Internal("In-memory store lock poisoned".to_string())
}
