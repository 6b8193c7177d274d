//! In-memory implementation of SetRepository.
//!
//! Backs tests and local development without a database. Insertion order
//! doubles as the store-native order.

use std::collections::HashSet;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, SetId, UserId};
use crate::domain::set::CustomSet;
use crate::ports::SetRepository;

/// In-memory implementation of SetRepository.
#[derive(Debug, Default)]
pub struct InMemorySetRepository {
    sets: RwLock<Vec<CustomSet>>,
}

impl InMemorySetRepository {
    /// Creates a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored sets across all owners.
    pub fn len(&self) -> usize {
        self.sets.read().unwrap().len()
    }

    /// Returns true when no sets are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl SetRepository for InMemorySetRepository {
    async fn insert(&self, set: &CustomSet) -> Result<(), DomainError> {
        self.sets.write().unwrap().push(set.clone());
        Ok(())
    }

    async fn find(&self, owner_id: &UserId, id: &SetId) -> Result<Option<CustomSet>, DomainError> {
        Ok(self
            .sets
            .read()
            .unwrap()
            .iter()
            .find(|s| s.id() == id && s.owner_id() == owner_id)
            .cloned())
    }

    async fn find_all(&self, owner_id: &UserId) -> Result<Vec<CustomSet>, DomainError> {
        Ok(self
            .sets
            .read()
            .unwrap()
            .iter()
            .filter(|s| s.owner_id() == owner_id)
            .cloned()
            .collect())
    }

    async fn update(&self, set: &CustomSet) -> Result<(), DomainError> {
        let mut sets = self.sets.write().unwrap();
        match sets
            .iter()
            .position(|s| s.id() == set.id() && s.owner_id() == set.owner_id())
        {
            Some(pos) => {
                sets[pos] = set.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::SetNotFound,
                format!("Set not found: {}", set.id()),
            )),
        }
    }

    async fn delete(&self, owner_id: &UserId, id: &SetId) -> Result<(), DomainError> {
        let mut sets = self.sets.write().unwrap();
        match sets
            .iter()
            .position(|s| s.id() == id && s.owner_id() == owner_id)
        {
            Some(pos) => {
                sets.remove(pos);
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::SetNotFound,
                format!("Set not found: {}", id),
            )),
        }
    }

    async fn name_taken(&self, owner_id: &UserId, name: &str) -> Result<bool, DomainError> {
        Ok(self
            .sets
            .read()
            .unwrap()
            .iter()
            .any(|s| s.owner_id() == owner_id && s.name().to_lowercase() == name))
    }

    async fn distinct_tags(&self, owner_id: &UserId) -> Result<Vec<String>, DomainError> {
        let tags: HashSet<String> = self
            .sets
            .read()
            .unwrap()
            .iter()
            .filter(|s| s.owner_id() == owner_id)
            .flat_map(|s| s.skills())
            .flat_map(|skill| skill.tags())
            .map(|tag| tag.as_str().to_string())
            .collect();

        Ok(tags.into_iter().collect())
    }
}
