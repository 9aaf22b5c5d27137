//! Thought domain entity
//!
//! A free-text message left on the comment wall.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::SubmissionError;

/// Unique identifier for a thought
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThoughtId(pub Uuid);

impl ThoughtId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ThoughtId {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Thought {
    pub id: ThoughtId,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Thought {
    /// Build a thought from a raw submission; blank messages are rejected
    pub fn from_message(message: &str) -> Result<Self, SubmissionError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(SubmissionError::EmptyMessage);
        }

        Ok(Self {
            id: ThoughtId::new(),
            message: message.to_string(),
            created_at: Utc::now(),
        })
    }
}
