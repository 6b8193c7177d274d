//! HTTP adapter for set endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AddSkillRequest, AddTagRequest, CreateSetRequest, DeleteSetResponse, ErrorResponse,
    RenameSetRequest, SetResponse, SetVotesRequest, SkillResponse,
};
pub use handlers::SetHandlers;
pub use routes::{set_routes, tag_routes};
