//! In-memory donor feed

use std::collections::VecDeque;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::{poisoned, push_bounded};
use crate::domain::entities::{Donation, FeedEntry};
use crate::domain::ports::FeedRepository;
use crate::error::DomainError;

/// Newest-first donor feed holding at most `capacity` entries
pub struct InMemoryFeedRepository {
    capacity: usize,
    entries: RwLock<VecDeque<FeedEntry>>,
}

impl InMemoryFeedRepository {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: RwLock::new(VecDeque::with_capacity(capacity.saturating_add(1))),
        }
    }
}

#[async_trait]
impl FeedRepository for InMemoryFeedRepository {
    async fn push_front(&self, donation: Donation) -> Result<Option<Donation>, DomainError> {
        let mut entries = self.entries.write().map_err(poisoned)?;
        let evicted = push_bounded(&mut *entries, FeedEntry::new(donation), self.capacity);
        Ok(evicted.map(|entry| entry.donation))
    }

    async fn list(&self) -> Result<Vec<FeedEntry>, DomainError> {
        let entries = self.entries.read().map_err(poisoned)?;
        Ok(entries.iter().cloned().collect())
    }

    async fn refresh_labels(&self, now: DateTime<Utc>) -> Result<usize, DomainError> {
        let mut entries = self.entries.write().map_err(poisoned)?;
        for entry in entries.iter_mut() {
            entry.refresh_label(now);
        }
        Ok(entries.len())
    }

    async fn len(&self) -> Result<usize, DomainError> {
        let entries = self.entries.read().map_err(poisoned)?;
        Ok(entries.len())
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}
