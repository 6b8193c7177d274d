//! RemoveTagHandler - Command handler for untagging a skill.

use std::sync::Arc;

use super::write_error;
use crate::domain::foundation::{SetId, SkillId, UserId};
use crate::domain::set::{CustomSet, SetError, Tag};
use crate::ports::SetRepository;

/// Command to remove a tag from a skill. The raw text is normalized
/// before matching, so removal is case-insensitive; anything short of an
/// exact post-normalization match is NotFound rather than a silent no-op.
#[derive(Debug, Clone)]
pub struct RemoveTagCommand {
    pub owner_id: UserId,
    pub set_id: SetId,
    pub skill_id: SkillId,
    pub tag: String,
}

/// Handler for removing tags.
pub struct RemoveTagHandler {
    repository: Arc<dyn SetRepository>,
}

impl RemoveTagHandler {
    pub fn new(repository: Arc<dyn SetRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: RemoveTagCommand) -> Result<CustomSet, SetError> {
        if cmd.tag.trim().is_empty() {
            return Err(SetError::validation("tag", "Tag cannot be empty"));
        }
        let tag = Tag::new(&cmd.tag)?;

        let mut set = self
            .repository
            .find(&cmd.owner_id, &cmd.set_id)
            .await?
            .ok_or_else(|| SetError::not_found(cmd.set_id))?;

        set.remove_skill_tag(&cmd.skill_id, &tag)?;

        self.repository
            .update(&set)
            .await
            .map_err(|e| write_error(e, cmd.set_id))?;

        Ok(set)
    }
}
