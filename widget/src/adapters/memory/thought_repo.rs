//! In-memory comment wall

use std::collections::VecDeque;
use std::sync::RwLock;

use async_trait::async_trait;

use super::{poisoned, push_bounded};
use crate::domain::entities::Thought;
use crate::domain::ports::ThoughtRepository;
use crate::error::DomainError;

pub struct InMemoryThoughtRepository {
    capacity: usize,
    thoughts: RwLock<VecDeque<Thought>>,
}

impl InMemoryThoughtRepository {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            thoughts: RwLock::new(VecDeque::new()),
        }
    }
}

#[async_trait]
impl ThoughtRepository for InMemoryThoughtRepository {
    async fn push_front(&self, thought: Thought) -> Result<Option<Thought>, DomainError> {
        let mut thoughts = self.thoughts.write().map_err(poisoned)?;
        Ok(push_bounded(&mut *thoughts, thought, self.capacity))
    }

    async fn list(&self) -> Result<Vec<Thought>, DomainError> {
        let thoughts = self.thoughts.read().map_err(poisoned)?;
        Ok(thoughts.iter().cloned().collect())
    }
}
