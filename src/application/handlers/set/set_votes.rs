//! SetVotesHandler - Command handler for setting a skill's vote count.

use std::sync::Arc;

use super::add_skill::validate_votes;
use super::write_error;
use crate::domain::foundation::{SetId, SkillId, UserId};
use crate::domain::set::{CustomSet, SetError};
use crate::ports::SetRepository;

/// Command to set a skill's vote count to an absolute value.
#[derive(Debug, Clone)]
pub struct SetVotesCommand {
    pub owner_id: UserId,
    pub set_id: SetId,
    pub skill_id: SkillId,
    pub votes: Option<i64>,
}

/// Handler for vote updates.
pub struct SetVotesHandler {
    repository: Arc<dyn SetRepository>,
}

impl SetVotesHandler {
    pub fn new(repository: Arc<dyn SetRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: SetVotesCommand) -> Result<CustomSet, SetError> {
        // Validation happens before the lookup so a bad payload never
        // costs a store round trip.
        let votes = validate_votes(cmd.votes)?;

        let mut set = self
            .repository
            .find(&cmd.owner_id, &cmd.set_id)
            .await?
            .ok_or_else(|| SetError::not_found(cmd.set_id))?;

        set.set_skill_votes(&cmd.skill_id, votes)?;

        self.repository
            .update(&set)
            .await
            .map_err(|e| write_error(e, cmd.set_id))?;

        Ok(set)
    }
}
