//! Repository port traits
//!
//! Both stores are newest-first and bounded: pushing past capacity evicts the
//! oldest item.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::{Donation, FeedEntry, Thought};
use crate::error::DomainError;

/// Store for the donor feed
#[async_trait]
pub trait FeedRepository: Send + Sync {
    /// Insert a donation at the front of the feed.
    ///
    /// Returns the donation evicted to stay within capacity, if any.
    async fn push_front(&self, donation: Donation) -> Result<Option<Donation>, DomainError>;

    /// All entries, newest first
    async fn list(&self) -> Result<Vec<FeedEntry>, DomainError>;

    /// Recompute every entry's age label as seen at `now`; returns the number refreshed
    async fn refresh_labels(&self, now: DateTime<Utc>) -> Result<usize, DomainError>;

    /// Number of entries currently held
    async fn len(&self) -> Result<usize, DomainError>;

    /// Maximum number of entries held
    fn capacity(&self) -> usize;
}

/// Store for the comment wall
#[async_trait]
pub trait ThoughtRepository: Send + Sync {
    /// Insert a thought at the front of the wall.
    ///
    /// Returns the thought evicted to stay within capacity, if any.
    async fn push_front(&self, thought: Thought) -> Result<Option<Thought>, DomainError>;

    /// All thoughts, newest first
    async fn list(&self) -> Result<Vec<Thought>, DomainError>;
}
