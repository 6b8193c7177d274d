//! ListDistinctTagsHandler - Query handler for the cross-set tag union.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::set::SetError;
use crate::ports::SetRepository;

/// Query for the distinct tags across all of the owner's sets.
#[derive(Debug, Clone)]
pub struct ListDistinctTagsQuery {
    pub owner_id: UserId,
}

/// Handler for the distinct-tag aggregation.
pub struct ListDistinctTagsHandler {
    repository: Arc<dyn SetRepository>,
}

impl ListDistinctTagsHandler {
    pub fn new(repository: Arc<dyn SetRepository>) -> Self {
        Self { repository }
    }

    /// Returns the unordered, deduplicated tag union. An owner with no
    /// sets or no tags gets an empty vec, never an error.
    pub async fn handle(&self, query: ListDistinctTagsQuery) -> Result<Vec<String>, SetError> {
        Ok(self.repository.distinct_tags(&query.owner_id).await?)
    }
}
