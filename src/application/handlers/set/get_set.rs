//! GetSetHandler - Query handler for retrieving a single set.

use std::sync::Arc;

use crate::domain::foundation::{SetId, UserId};
use crate::domain::set::{CustomSet, SetError};
use crate::ports::SetRepository;

/// Query to get a set by ID.
#[derive(Debug, Clone)]
pub struct GetSetQuery {
    pub owner_id: UserId,
    pub set_id: SetId,
}

/// Handler for retrieving set details.
pub struct GetSetHandler {
    repository: Arc<dyn SetRepository>,
}

impl GetSetHandler {
    pub fn new(repository: Arc<dyn SetRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetSetQuery) -> Result<CustomSet, SetError> {
        self.repository
            .find(&query.owner_id, &query.set_id)
            .await?
            .ok_or_else(|| SetError::not_found(query.set_id))
    }
}
