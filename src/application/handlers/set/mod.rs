//! Set command and query handlers.
//!
//! One handler per operation. All lookups and mutations are scoped by
//! the acting owner at the repository boundary, so a set owned by
//! another user surfaces as NotFound rather than Forbidden.

mod add_skill;
mod add_tag;
mod create_set;
mod delete_set;
mod get_set;
mod list_sets;
mod list_tags;
mod remove_skill;
mod remove_tag;
mod rename_set;
mod set_votes;

pub use add_skill::{AddSkillCommand, AddSkillHandler};
pub use add_tag::{AddTagCommand, AddTagHandler};
pub use create_set::{CreateSetCommand, CreateSetHandler};
pub use delete_set::{DeleteSetCommand, DeleteSetHandler, DeleteSetResult};
pub use get_set::{GetSetHandler, GetSetQuery};
pub use list_sets::{ListSetsHandler, ListSetsQuery};
pub use list_tags::{ListDistinctTagsHandler, ListDistinctTagsQuery};
pub use remove_skill::{RemoveSkillCommand, RemoveSkillHandler};
pub use remove_tag::{RemoveTagCommand, RemoveTagHandler};
pub use rename_set::{RenameSetCommand, RenameSetHandler};
pub use set_votes::{SetVotesCommand, SetVotesHandler};

use crate::domain::foundation::{DomainError, ErrorCode, SetId};
use crate::domain::set::SetError;

/// Maps a repository write error back to the set-level error.
///
/// A zero-row update or delete means the owned document vanished between
/// load and write (or never existed), which is reported as NotFound.
pub(crate) fn write_error(err: DomainError, set_id: SetId) -> SetError {
    match err.code {
        ErrorCode::SetNotFound => SetError::not_found(set_id),
        _ => SetError::from(err),
    }
}
