//! HTTP handlers for set endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::set::{
    AddSkillCommand, AddSkillHandler, AddTagCommand, AddTagHandler, CreateSetCommand,
    CreateSetHandler, DeleteSetCommand, DeleteSetHandler, GetSetHandler, GetSetQuery,
    ListDistinctTagsHandler, ListDistinctTagsQuery, ListSetsHandler, ListSetsQuery,
    RemoveSkillCommand, RemoveSkillHandler, RemoveTagCommand, RemoveTagHandler, RenameSetCommand,
    RenameSetHandler, SetVotesCommand, SetVotesHandler,
};
use crate::domain::foundation::{SetId, SkillId};
use crate::domain::set::SetError;
use crate::ports::SetRepository;

use super::dto::{
    AddSkillRequest, AddTagRequest, CreateSetRequest, DeleteSetResponse, ErrorResponse,
    RenameSetRequest, SetResponse, SetVotesRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

/// Application handlers shared by the set routes.
///
/// All handlers draw on the same repository, so the state is built from
/// it in one step rather than wiring eleven Arcs by hand.
#[derive(Clone)]
pub struct SetHandlers {
    create_handler: Arc<CreateSetHandler>,
    rename_handler: Arc<RenameSetHandler>,
    delete_handler: Arc<DeleteSetHandler>,
    list_handler: Arc<ListSetsHandler>,
    get_handler: Arc<GetSetHandler>,
    add_skill_handler: Arc<AddSkillHandler>,
    remove_skill_handler: Arc<RemoveSkillHandler>,
    set_votes_handler: Arc<SetVotesHandler>,
    add_tag_handler: Arc<AddTagHandler>,
    remove_tag_handler: Arc<RemoveTagHandler>,
    list_tags_handler: Arc<ListDistinctTagsHandler>,
}

impl SetHandlers {
    pub fn new(repository: Arc<dyn SetRepository>) -> Self {
        Self {
            create_handler: Arc::new(CreateSetHandler::new(repository.clone())),
            rename_handler: Arc::new(RenameSetHandler::new(repository.clone())),
            delete_handler: Arc::new(DeleteSetHandler::new(repository.clone())),
            list_handler: Arc::new(ListSetsHandler::new(repository.clone())),
            get_handler: Arc::new(GetSetHandler::new(repository.clone())),
            add_skill_handler: Arc::new(AddSkillHandler::new(repository.clone())),
            remove_skill_handler: Arc::new(RemoveSkillHandler::new(repository.clone())),
            set_votes_handler: Arc::new(SetVotesHandler::new(repository.clone())),
            add_tag_handler: Arc::new(AddTagHandler::new(repository.clone())),
            remove_tag_handler: Arc::new(RemoveTagHandler::new(repository.clone())),
            list_tags_handler: Arc::new(ListDistinctTagsHandler::new(repository)),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/sets - Create a new set
pub async fn create_set(
    State(handlers): State<SetHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<CreateSetRequest>,
) -> Response {
    let cmd = CreateSetCommand {
        owner_id: user.id,
        name: req.name,
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(set) => (StatusCode::CREATED, Json(SetResponse::from(set))).into_response(),
        Err(e) => handle_set_error(e),
    }
}

/// GET /api/sets - List the caller's sets
pub async fn list_sets(
    State(handlers): State<SetHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let query = ListSetsQuery { owner_id: user.id };

    match handlers.list_handler.handle(query).await {
        Ok(sets) => {
            let response: Vec<SetResponse> = sets.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_set_error(e),
    }
}

/// GET /api/sets/:set_id - Get a single set
pub async fn get_set(
    State(handlers): State<SetHandlers>,
    RequireAuth(user): RequireAuth,
    Path(set_id): Path<String>,
) -> Response {
    let set_id = match parse_set_id(&set_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let query = GetSetQuery {
        owner_id: user.id,
        set_id,
    };

    match handlers.get_handler.handle(query).await {
        Ok(set) => (StatusCode::OK, Json(SetResponse::from(set))).into_response(),
        Err(e) => handle_set_error(e),
    }
}

/// PUT /api/sets/:set_id - Rename a set
pub async fn rename_set(
    State(handlers): State<SetHandlers>,
    RequireAuth(user): RequireAuth,
    Path(set_id): Path<String>,
    Json(req): Json<RenameSetRequest>,
) -> Response {
    let set_id = match parse_set_id(&set_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = RenameSetCommand {
        owner_id: user.id,
        set_id,
        name: req.name,
    };

    match handlers.rename_handler.handle(cmd).await {
        Ok(set) => (StatusCode::OK, Json(SetResponse::from(set))).into_response(),
        Err(e) => handle_set_error(e),
    }
}

/// DELETE /api/sets/:set_id - Delete a set and all its skills
pub async fn delete_set(
    State(handlers): State<SetHandlers>,
    RequireAuth(user): RequireAuth,
    Path(set_id): Path<String>,
) -> Response {
    let set_id = match parse_set_id(&set_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = DeleteSetCommand {
        owner_id: user.id,
        set_id,
    };

    match handlers.delete_handler.handle(cmd).await {
        Ok(result) => {
            let response = DeleteSetResponse {
                set_id: result.set_id.to_string(),
                message: "Set deleted successfully".to_string(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_set_error(e),
    }
}

/// POST /api/sets/:set_id/skills - Add a skill to a set
pub async fn add_skill(
    State(handlers): State<SetHandlers>,
    RequireAuth(user): RequireAuth,
    Path(set_id): Path<String>,
    Json(req): Json<AddSkillRequest>,
) -> Response {
    let set_id = match parse_set_id(&set_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = AddSkillCommand {
        owner_id: user.id,
        set_id,
        name: req.name,
        votes: req.votes,
    };

    match handlers.add_skill_handler.handle(cmd).await {
        Ok(set) => (StatusCode::CREATED, Json(SetResponse::from(set))).into_response(),
        Err(e) => handle_set_error(e),
    }
}

/// DELETE /api/sets/:set_id/skills/:skill_id - Remove a skill
pub async fn remove_skill(
    State(handlers): State<SetHandlers>,
    RequireAuth(user): RequireAuth,
    Path((set_id, skill_id)): Path<(String, String)>,
) -> Response {
    let (set_id, skill_id) = match parse_skill_path(&set_id, &skill_id) {
        Ok(ids) => ids,
        Err(response) => return response,
    };

    let cmd = RemoveSkillCommand {
        owner_id: user.id,
        set_id,
        skill_id,
    };

    match handlers.remove_skill_handler.handle(cmd).await {
        Ok(set) => (StatusCode::OK, Json(SetResponse::from(set))).into_response(),
        Err(e) => handle_set_error(e),
    }
}

/// PUT /api/sets/:set_id/skills/:skill_id/votes - Set a skill's votes
pub async fn set_votes(
    State(handlers): State<SetHandlers>,
    RequireAuth(user): RequireAuth,
    Path((set_id, skill_id)): Path<(String, String)>,
    Json(req): Json<SetVotesRequest>,
) -> Response {
    let (set_id, skill_id) = match parse_skill_path(&set_id, &skill_id) {
        Ok(ids) => ids,
        Err(response) => return response,
    };

    let cmd = SetVotesCommand {
        owner_id: user.id,
        set_id,
        skill_id,
        votes: req.votes,
    };

    match handlers.set_votes_handler.handle(cmd).await {
        Ok(set) => (StatusCode::OK, Json(SetResponse::from(set))).into_response(),
        Err(e) => handle_set_error(e),
    }
}

/// POST /api/sets/:set_id/skills/:skill_id/tags - Add a tag to a skill
pub async fn add_tag(
    State(handlers): State<SetHandlers>,
    RequireAuth(user): RequireAuth,
    Path((set_id, skill_id)): Path<(String, String)>,
    Json(req): Json<AddTagRequest>,
) -> Response {
    let (set_id, skill_id) = match parse_skill_path(&set_id, &skill_id) {
        Ok(ids) => ids,
        Err(response) => return response,
    };

    let cmd = AddTagCommand {
        owner_id: user.id,
        set_id,
        skill_id,
        tag: req.tag,
    };

    match handlers.add_tag_handler.handle(cmd).await {
        Ok(set) => (StatusCode::OK, Json(SetResponse::from(set))).into_response(),
        Err(e) => handle_set_error(e),
    }
}

/// DELETE /api/sets/:set_id/skills/:skill_id/tags/:tag - Remove a tag
pub async fn remove_tag(
    State(handlers): State<SetHandlers>,
    RequireAuth(user): RequireAuth,
    Path((set_id, skill_id, tag)): Path<(String, String, String)>,
) -> Response {
    let (set_id, skill_id) = match parse_skill_path(&set_id, &skill_id) {
        Ok(ids) => ids,
        Err(response) => return response,
    };

    let cmd = RemoveTagCommand {
        owner_id: user.id,
        set_id,
        skill_id,
        tag,
    };

    match handlers.remove_tag_handler.handle(cmd).await {
        Ok(set) => (StatusCode::OK, Json(SetResponse::from(set))).into_response(),
        Err(e) => handle_set_error(e),
    }
}

/// GET /api/tags - Distinct tags across all of the caller's sets
pub async fn list_tags(
    State(handlers): State<SetHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let query = ListDistinctTagsQuery { owner_id: user.id };

    match handlers.list_tags_handler.handle(query).await {
        Ok(tags) => (StatusCode::OK, Json(tags)).into_response(),
        Err(e) => handle_set_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn parse_set_id(raw: &str) -> Result<SetId, Response> {
    raw.parse::<SetId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid set ID")),
        )
            .into_response()
    })
}

fn parse_skill_path(set_id: &str, skill_id: &str) -> Result<(SetId, SkillId), Response> {
    let set_id = parse_set_id(set_id)?;
    let skill_id = skill_id.parse::<SkillId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid skill ID")),
        )
            .into_response()
    })?;
    Ok((set_id, skill_id))
}

fn handle_set_error(error: SetError) -> Response {
    match error {
        SetError::NotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Set", &id.to_string())),
        )
            .into_response(),
        SetError::SkillNotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Skill", &id.to_string())),
        )
            .into_response(),
        SetError::TagNotFound(tag) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Tag", &tag)),
        )
            .into_response(),
        SetError::Conflict(msg) => {
            (StatusCode::BAD_REQUEST, Json(ErrorResponse::conflict(msg))).into_response()
        }
        SetError::ValidationFailed { field, message } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(format!(
                "Validation failed for {}: {}",
                field, message
            ))),
        )
            .into_response(),
        SetError::Infrastructure(msg) => {
            tracing::error!("Set operation failed: {}", msg);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("Internal server error")),
            )
                .into_response()
        }
    }
}
