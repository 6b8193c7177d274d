//! Set repository port.
//!
//! Defines the contract for persisting and retrieving CustomSet
//! aggregates. Implementations handle the actual store operations.
//!
//! # Design
//!
//! - **Owner-scoped**: every lookup and mutation takes the owner id and
//!   applies it as part of a single predicate together with the set id.
//!   A set owned by someone else is indistinguishable from a missing one.
//! - **Document-shaped**: aggregates are written whole; the nested skill
//!   array travels with its set.

use crate::domain::foundation::{DomainError, SetId, UserId};
use crate::domain::set::CustomSet;
use async_trait::async_trait;

/// Repository port for CustomSet aggregate persistence.
#[async_trait]
pub trait SetRepository: Send + Sync {
    /// Persist a new set.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, set: &CustomSet) -> Result<(), DomainError>;

    /// Find a set by id, scoped to its owner.
    ///
    /// Returns `None` when the set does not exist or belongs to a
    /// different owner.
    async fn find(&self, owner_id: &UserId, id: &SetId) -> Result<Option<CustomSet>, DomainError>;

    /// Find all sets owned by a user, in store-native order.
    async fn find_all(&self, owner_id: &UserId) -> Result<Vec<CustomSet>, DomainError>;

    /// Replace an existing set document, scoped to its owner.
    ///
    /// # Errors
    ///
    /// - `SetNotFound` if no owned set matches
    /// - `DatabaseError` on persistence failure
    async fn update(&self, set: &CustomSet) -> Result<(), DomainError>;

    /// Delete a set and all its skills in a single store operation.
    ///
    /// # Errors
    ///
    /// - `SetNotFound` if no owned set matches
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, owner_id: &UserId, id: &SetId) -> Result<(), DomainError>;

    /// Check whether the owner already has a set with this name.
    ///
    /// `name` must be lower-cased by the caller; the store compares
    /// case-insensitively against stored names.
    async fn name_taken(&self, owner_id: &UserId, name: &str) -> Result<bool, DomainError>;

    /// Compute the distinct normalized tags across all of the owner's
    /// sets and skills. Unordered, no duplicates; empty when the owner
    /// has nothing.
    async fn distinct_tags(&self, owner_id: &UserId) -> Result<Vec<String>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn SetRepository) {}
    }
}
