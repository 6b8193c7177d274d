//! AddTagHandler - Command handler for tagging a skill.

use std::sync::Arc;

use super::write_error;
use crate::domain::foundation::{SetId, SkillId, UserId};
use crate::domain::set::{CustomSet, SetError, Tag};
use crate::ports::SetRepository;

/// Command to add a tag to a skill. Carries the raw tag text; the
/// handler runs it through normalization.
#[derive(Debug, Clone)]
pub struct AddTagCommand {
    pub owner_id: UserId,
    pub set_id: SetId,
    pub skill_id: SkillId,
    pub tag: String,
}

/// Handler for adding tags.
pub struct AddTagHandler {
    repository: Arc<dyn SetRepository>,
}

impl AddTagHandler {
    pub fn new(repository: Arc<dyn SetRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: AddTagCommand) -> Result<CustomSet, SetError> {
        // 1. Normalize; empty raw input and all-stripped input are both
        //    rejected before the store sees anything.
        if cmd.tag.trim().is_empty() {
            return Err(SetError::validation("tag", "Tag cannot be empty"));
        }
        let tag = Tag::new(&cmd.tag)?;

        // 2. Load, scoped by owner
        let mut set = self
            .repository
            .find(&cmd.owner_id, &cmd.set_id)
            .await?
            .ok_or_else(|| SetError::not_found(cmd.set_id))?;

        // 3. Append (deduplicated against the normalized form)
        set.add_skill_tag(&cmd.skill_id, tag)?;

        // 4. Persist
        self.repository
            .update(&set)
            .await
            .map_err(|e| write_error(e, cmd.set_id))?;

        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemorySetRepository;
    use crate::application::handlers::set::{
        AddSkillCommand, AddSkillHandler, CreateSetCommand, CreateSetHandler,
    };

    fn owner(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    async fn seeded() -> (Arc<InMemorySetRepository>, SetId, SkillId) {
        let repo = Arc::new(InMemorySetRepository::new());
        let set = CreateSetHandler::new(repo.clone())
            .handle(CreateSetCommand {
                owner_id: owner("alice"),
                name: "Team Alpha".to_string(),
            })
            .await
            .unwrap();

        let updated = AddSkillHandler::new(repo.clone())
            .handle(AddSkillCommand {
                owner_id: owner("alice"),
                set_id: *set.id(),
                name: "Go".to_string(),
                votes: Some(1),
            })
            .await
            .unwrap();

        let skill_id = *updated.skills()[0].id();
        (repo, *set.id(), skill_id)
    }

    fn cmd(set_id: SetId, skill_id: SkillId, tag: &str) -> AddTagCommand {
        AddTagCommand {
            owner_id: owner("alice"),
            set_id,
            skill_id,
            tag: tag.to_string(),
        }
    }

    #[tokio::test]
    async fn stores_normalized_tag() {
        let (repo, set_id, skill_id) = seeded().await;
        let handler = AddTagHandler::new(repo);

        let updated = handler
            .handle(cmd(set_id, skill_id, "Back-End!"))
            .await
            .unwrap();

        let tags = updated.skill(&skill_id).unwrap().tags();
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].as_str(), "backend");
    }

    #[tokio::test]
    async fn rejects_case_variant_of_existing_tag() {
        let (repo, set_id, skill_id) = seeded().await;
        let handler = AddTagHandler::new(repo);

        handler
            .handle(cmd(set_id, skill_id, "Back-End!"))
            .await
            .unwrap();
        let result = handler.handle(cmd(set_id, skill_id, "BACKEND")).await;

        assert!(matches!(result, Err(SetError::Conflict(_))));
    }

    #[tokio::test]
    async fn rejects_empty_tag() {
        let (repo, set_id, skill_id) = seeded().await;
        let handler = AddTagHandler::new(repo);

        let result = handler.handle(cmd(set_id, skill_id, "   ")).await;
        assert!(matches!(result, Err(SetError::ValidationFailed { .. })));
    }

    #[tokio::test]
    async fn rejects_tag_with_no_alphanumerics() {
        let (repo, set_id, skill_id) = seeded().await;
        let handler = AddTagHandler::new(repo);

        let result = handler.handle(cmd(set_id, skill_id, "@#$%")).await;
        assert!(matches!(result, Err(SetError::ValidationFailed { .. })));
    }

    #[tokio::test]
    async fn unknown_skill_is_not_found() {
        let (repo, set_id, _) = seeded().await;
        let handler = AddTagHandler::new(repo);

        let result = handler.handle(cmd(set_id, SkillId::new(), "backend")).await;
        assert!(matches!(result, Err(SetError::SkillNotFound(_))));
    }
}
