//! RemoveSkillHandler - Command handler for detaching a skill from a set.

use std::sync::Arc;

use super::write_error;
use crate::domain::foundation::{SetId, SkillId, UserId};
use crate::domain::set::{CustomSet, SetError};
use crate::ports::SetRepository;

/// Command to remove a skill from a set.
#[derive(Debug, Clone)]
pub struct RemoveSkillCommand {
    pub owner_id: UserId,
    pub set_id: SetId,
    pub skill_id: SkillId,
}

/// Handler for removing skills.
pub struct RemoveSkillHandler {
    repository: Arc<dyn SetRepository>,
}

impl RemoveSkillHandler {
    pub fn new(repository: Arc<dyn SetRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: RemoveSkillCommand) -> Result<CustomSet, SetError> {
        let mut set = self
            .repository
            .find(&cmd.owner_id, &cmd.set_id)
            .await?
            .ok_or_else(|| SetError::not_found(cmd.set_id))?;

        set.remove_skill(&cmd.skill_id)?;

        self.repository
            .update(&set)
            .await
            .map_err(|e| write_error(e, cmd.set_id))?;

        Ok(set)
    }
}
