//! ListSetsHandler - Query handler for listing a user's sets.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::set::{CustomSet, SetError};
use crate::ports::SetRepository;

/// Query to list all sets owned by a user.
#[derive(Debug, Clone)]
pub struct ListSetsQuery {
    pub owner_id: UserId,
}

/// Handler for listing owned sets.
pub struct ListSetsHandler {
    repository: Arc<dyn SetRepository>,
}

impl ListSetsHandler {
    pub fn new(repository: Arc<dyn SetRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListSetsQuery) -> Result<Vec<CustomSet>, SetError> {
        Ok(self.repository.find_all(&query.owner_id).await?)
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
    async fn lists_only_the_owners_sets() {
        let repo = Arc::new(InMemorySetRepository::new());
        let create = CreateSetHandler::new(repo.clone());

        for name in ["One", "Two"] {
            create
                .handle(CreateSetCommand {
                    owner_id: owner("alice"),
                    name: name.to_string(),
                })
                .await
                .unwrap();
        }
        create
            .handle(CreateSetCommand {
                owner_id: owner("bob"),
                name: "Three".to_string(),
            })
            .await
            .unwrap();

        let sets = ListSetsHandler::new(repo)
            .handle(ListSetsQuery {
                owner_id: owner("alice"),
            })
            .await
            .unwrap();

        assert_eq!(sets.len(), 2);
        assert!(sets.iter().all(|s| s.owner_id() == &owner("alice")));
    }

    #[tokio::test]
    async fn empty_owner_gets_empty_list() {
        let repo = Arc::new(InMemorySetRepository::new());

        let sets = ListSetsHandler::new(repo)
            .handle(ListSetsQuery {
                owner_id: owner("nobody"),
            })
            .await
            .unwrap();

        assert!(sets.is_empty());
    }
}
