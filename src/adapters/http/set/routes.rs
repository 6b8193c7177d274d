//! HTTP routes for set and tag endpoints.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use super::handlers::{
    add_skill, add_tag, create_set, delete_set, get_set, list_sets, list_tags, remove_skill,
    remove_tag, rename_set, set_votes, SetHandlers,
};

/// Creates the set router with all endpoints.
pub fn set_routes(handlers: SetHandlers) -> Router {
    Router::new()
        .route("/", post(create_set))
        .route("/", get(list_sets))
        .route("/:set_id", get(get_set))
        .route("/:set_id", put(rename_set))
        .route("/:set_id", delete(delete_set))
        .route("/:set_id/skills", post(add_skill))
        .route("/:set_id/skills/:skill_id", delete(remove_skill))
        .route("/:set_id/skills/:skill_id/votes", put(set_votes))
        .route("/:set_id/skills/:skill_id/tags", post(add_tag))
        .route("/:set_id/skills/:skill_id/tags/:tag", delete(remove_tag))
        .with_state(handlers)
}

/// Creates the tag aggregation router.
pub fn tag_routes(handlers: SetHandlers) -> Router {
    Router::new()
        .route("/", get(list_tags))
        .with_state(handlers)
}
