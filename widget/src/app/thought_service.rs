//! Thought service
//!
//! The comment wall: visitors leave short messages, newest shown first.

use std::sync::Arc;

use crate::domain::entities::Thought;
use crate::domain::ports::ThoughtRepository;
use crate::error::AppError;

pub struct ThoughtService<TR>
where
    TR: ThoughtRepository,
{
    thoughts: Arc<TR>,
}

impl<TR> ThoughtService<TR>
where
    TR: ThoughtRepository,
{
    pub fn new(thoughts: Arc<TR>) -> Self {
        Self { thoughts }
    }

    /// Post a message to the wall. Blank messages are skipped with `Ok(None)`.
    pub async fn post(&self, message: &str) -> Result<Option<Thought>, AppError> {
        let thought = match Thought::from_message(message) {
            Ok(thought) => thought,
            Err(reason) => {
                tracing::debug!(%reason, "Skipping thought submission");
                return Ok(None);
            }
        };

        if let Some(evicted) = self.thoughts.push_front(thought.clone()).await? {
            tracing::debug!(thought_id = ?evicted.id, "Evicted oldest thought");
        }
        tracing::info!(thought_id = ?thought.id, "Thought posted");

        Ok(Some(thought))
    }

    /// Thoughts, newest first
    pub async fn list(&self) -> Result<Vec<Thought>, AppError> {
        Ok(self.thoughts.list().await?)
    }
}
