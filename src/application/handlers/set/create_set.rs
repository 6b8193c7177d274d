//! CreateSetHandler - Command handler for creating new custom sets.

use std::sync::Arc;

use crate::domain::foundation::{SetId, UserId};
use crate::domain::set::{CustomSet, SetError};
use crate::ports::SetRepository;

/// Command to create a new custom set.
#[derive(Debug, Clone)]
pub struct CreateSetCommand {
    pub owner_id: UserId,
    pub name: String,
}

/// Handler for creating custom sets.
pub struct CreateSetHandler {
    repository: Arc<dyn SetRepository>,
}

impl CreateSetHandler {
    pub fn new(repository: Arc<dyn SetRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateSetCommand) -> Result<CustomSet, SetError> {
        // 1. Validate name
        let name = cmd.name.trim();
        if name.is_empty() {
            return Err(SetError::validation("name", "Name cannot be empty"));
        }

        // 2. Per-owner uniqueness, case-insensitive. Check-then-act: two
        //    concurrent creates can both pass; a unique index on
        //    (owner_id, lower(name)) is the storage-level hardening.
        if self
            .repository
            .name_taken(&cmd.owner_id, &name.to_lowercase())
            .await?
        {
            return Err(SetError::conflict(format!(
                "A set named '{}' already exists",
                name
            )));
        }

        // 3. Create and persist the empty aggregate
        let set = CustomSet::new(SetId::new(), cmd.owner_id, name)?;
        self.repository.insert(&set).await?;

        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemorySetRepository;

    fn owner(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    fn handler() -> (Arc<InMemorySetRepository>, CreateSetHandler) {
        let repo = Arc::new(InMemorySetRepository::new());
        let handler = CreateSetHandler::new(repo.clone());
        (repo, handler)
    }

    #[tokio::test]
    async fn creates_empty_set_with_trimmed_name() {
        let (repo, handler) = handler();

        let set = handler
            .handle(CreateSetCommand {
                owner_id: owner("alice"),
                name: "  Team Alpha  ".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(set.name(), "Team Alpha");
        assert!(set.skills().is_empty());
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn rejects_empty_name() {
        let (repo, handler) = handler();

        let result = handler
            .handle(CreateSetCommand {
                owner_id: owner("alice"),
                name: "   ".to_string(),
            })
            .await;

        assert!(matches!(result, Err(SetError::ValidationFailed { .. })));
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn rejects_duplicate_name_differing_only_in_case() {
        let (_, handler) = handler();

        handler
            .handle(CreateSetCommand {
                owner_id: owner("alice"),
                name: "Team Alpha".to_string(),
            })
            .await
            .unwrap();

        let result = handler
            .handle(CreateSetCommand {
                owner_id: owner("alice"),
                name: "TEAM ALPHA".to_string(),
            })
            .await;

        assert!(matches!(result, Err(SetError::Conflict(_))));
    }

    #[tokio::test]
    async fn same_name_is_allowed_for_different_owners() {
        let (repo, handler) = handler();

        handler
            .handle(CreateSetCommand {
                owner_id: owner("alice"),
                name: "Team Alpha".to_string(),
            })
            .await
            .unwrap();

        let result = handler
            .handle(CreateSetCommand {
                owner_id: owner("bob"),
                name: "Team Alpha".to_string(),
            })
            .await;

        assert!(result.is_ok());
        assert_eq!(repo.len(), 2);
    }
}
