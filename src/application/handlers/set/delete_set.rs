//! DeleteSetHandler - Command handler for deleting custom sets.

use std::sync::Arc;

use super::write_error;
use crate::domain::foundation::{SetId, UserId};
use crate::domain::set::SetError;
use crate::ports::SetRepository;

/// Command to delete a custom set.
#[derive(Debug, Clone)]
pub struct DeleteSetCommand {
    pub owner_id: UserId,
    pub set_id: SetId,
}

/// Confirmation of a successful deletion.
#[derive(Debug, Clone)]
pub struct DeleteSetResult {
    pub set_id: SetId,
}

/// Handler for deleting custom sets.
pub struct DeleteSetHandler {
    repository: Arc<dyn SetRepository>,
}

impl DeleteSetHandler {
    pub fn new(repository: Arc<dyn SetRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteSetCommand) -> Result<DeleteSetResult, SetError> {
        // Single store operation; the skills travel with the document.
        self.repository
            .delete(&cmd.owner_id, &cmd.set_id)
            .await
            .map_err(|e| write_error(e, cmd.set_id))?;

        Ok(DeleteSetResult { set_id: cmd.set_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemorySetRepository;
    use crate::application::handlers::set::{CreateSetCommand, CreateSetHandler};

    fn owner(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    #[tokio::test]
    async fn deletes_owned_set() {
        let repo = Arc::new(InMemorySetRepository::new());
        let set = CreateSetHandler::new(repo.clone())
            .handle(CreateSetCommand {
                owner_id: owner("alice"),
                name: "Team Alpha".to_string(),
            })
            .await
            .unwrap();

        let result = DeleteSetHandler::new(repo.clone())
            .handle(DeleteSetCommand {
                owner_id: owner("alice"),
                set_id: *set.id(),
            })
            .await
            .unwrap();

        assert_eq!(result.set_id, *set.id());
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn missing_set_is_not_found() {
        let repo = Arc::new(InMemorySetRepository::new());

        let result = DeleteSetHandler::new(repo)
            .handle(DeleteSetCommand {
                owner_id: owner("alice"),
                set_id: SetId::new(),
            })
            .await;

        assert!(matches!(result, Err(SetError::NotFound(_))));
    }

    #[tokio::test]
    async fn other_owners_set_is_not_found_and_survives() {
        let repo = Arc::new(InMemorySetRepository::new());
        let set = CreateSetHandler::new(repo.clone())
            .handle(CreateSetCommand {
                owner_id: owner("alice"),
                name: "Team Alpha".to_string(),
            })
            .await
            .unwrap();

        let result = DeleteSetHandler::new(repo.clone())
            .handle(DeleteSetCommand {
                owner_id: owner("bob"),
                set_id: *set.id(),
            })
            .await;

        assert!(matches!(result, Err(SetError::NotFound(_))));
        assert_eq!(repo.len(), 1);
    }
}
