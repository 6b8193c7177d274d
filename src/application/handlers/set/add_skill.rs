//! AddSkillHandler - Command handler for appending a skill to a set.

use std::sync::Arc;

use super::write_error;
use crate::domain::foundation::{SetId, UserId};
use crate::domain::set::{CustomSet, SetError};
use crate::ports::SetRepository;

/// Command to add a skill to a set.
///
/// `votes` stays optional all the way down from the request body: a
/// missing vote count is a validation failure, not a default.
#[derive(Debug, Clone)]
pub struct AddSkillCommand {
    pub owner_id: UserId,
    pub set_id: SetId,
    pub name: String,
    pub votes: Option<i64>,
}

/// Handler for adding skills.
pub struct AddSkillHandler {
    repository: Arc<dyn SetRepository>,
}

impl AddSkillHandler {
    pub fn new(repository: Arc<dyn SetRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: AddSkillCommand) -> Result<CustomSet, SetError> {
        // 1. Validate input before touching the store
        let votes = validate_votes(cmd.votes)?;
        if cmd.name.trim().is_empty() {
            return Err(SetError::validation("name", "Skill name cannot be empty"));
        }

        // 2. Load, scoped by owner
        let mut set = self
            .repository
            .find(&cmd.owner_id, &cmd.set_id)
            .await?
            .ok_or_else(|| SetError::not_found(cmd.set_id))?;

        // 3. Append (enforces case-insensitive name uniqueness)
        set.add_skill(&cmd.name, votes)?;

        // 4. Persist
        self.repository
            .update(&set)
            .await
            .map_err(|e| write_error(e, cmd.set_id))?;

        Ok(set)
    }
}

/// Validates a raw vote count from the request body.
pub(super) fn validate_votes(votes: Option<i64>) -> Result<u32, SetError> {
    match votes {
        None => Err(SetError::validation("votes", "votes is required")),
        Some(v) if v < 0 => Err(SetError::validation("votes", "votes cannot be negative")),
        Some(v) => u32::try_from(v)
            .map_err(|_| SetError::validation("votes", "votes is out of range")),
    }
}
