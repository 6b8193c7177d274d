//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between
//! ports. Commands mutate a single aggregate; queries read owner-scoped
//! views.

pub mod handlers;

pub use handlers::set::{
    AddSkillCommand, AddSkillHandler, AddTagCommand, AddTagHandler, CreateSetCommand,
    CreateSetHandler, DeleteSetCommand, DeleteSetHandler, DeleteSetResult, GetSetHandler,
    GetSetQuery, ListDistinctTagsHandler, ListDistinctTagsQuery, ListSetsHandler, ListSetsQuery,
    RemoveSkillCommand, RemoveSkillHandler, RemoveTagCommand, RemoveTagHandler, RenameSetCommand,
    RenameSetHandler, SetVotesCommand, SetVotesHandler,
};
