//! RenameSetHandler - Command handler for renaming custom sets.

use std::sync::Arc;

use super::write_error;
use crate::domain::foundation::{SetId, UserId};
use crate::domain::set::{CustomSet, SetError};
use crate::ports::SetRepository;

/// Command to rename a custom set.
#[derive(Debug, Clone)]
pub struct RenameSetCommand {
    pub owner_id: UserId,
    pub set_id: SetId,
    pub name: String,
}

/// Handler for renaming custom sets.
pub struct RenameSetHandler {
    repository: Arc<dyn SetRepository>,
}

impl RenameSetHandler {
    pub fn new(repository: Arc<dyn SetRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: RenameSetCommand) -> Result<CustomSet, SetError> {
        // 1. Validate the new name before touching the store
        if cmd.name.trim().is_empty() {
            return Err(SetError::validation("name", "Name cannot be empty"));
        }

        // 2. Load, scoped by owner
        let mut set = self
            .repository
            .find(&cmd.owner_id, &cmd.set_id)
            .await?
            .ok_or_else(|| SetError::not_found(cmd.set_id))?;

        // 3. Apply rename
        set.rename(&cmd.name)?;

        // 4. Persist
        self.repository
            .update(&set)
            .await
            .map_err(|e| write_error(e, cmd.set_id))?;

        Ok(set)
    }
}
