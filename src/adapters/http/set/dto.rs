//! HTTP DTOs for set endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::domain::set::{CustomSet, Skill};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to create a new set.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSetRequest {
    pub name: String,
}

/// Request to rename a set.
#[derive(Debug, Clone, Deserialize)]
pub struct RenameSetRequest {
    pub name: String,
}

/// Request to add a skill to a set.
///
/// `votes` is optional here so that an absent field reaches the handler
/// as a validation failure rather than a 422 from the JSON layer.
#[derive(Debug, Clone, Deserialize)]
pub struct AddSkillRequest {
    pub name: String,
    #[serde(default)]
    pub votes: Option<i64>,
}

/// Request to set a skill's vote count.
#[derive(Debug, Clone, Deserialize)]
pub struct SetVotesRequest {
    #[serde(default)]
    pub votes: Option<i64>,
}

/// Request to add a tag to a skill.
#[derive(Debug, Clone, Deserialize)]
pub struct AddTagRequest {
    pub tag: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// A set with its skills, as returned by every set endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct SetResponse {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub skills: Vec<SkillResponse>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<CustomSet> for SetResponse {
    fn from(set: CustomSet) -> Self {
        Self {
            id: set.id().to_string(),
            owner_id: set.owner_id().to_string(),
            name: set.name().to_string(),
            skills: set.skills().iter().map(SkillResponse::from).collect(),
            created_at: set.created_at().as_datetime().to_rfc3339(),
            updated_at: set.updated_at().as_datetime().to_rfc3339(),
        }
    }
}

/// A skill within a set response.
#[derive(Debug, Clone, Serialize)]
pub struct SkillResponse {
    pub id: String,
    pub name: String,
    pub votes: u32,
    pub tags: Vec<String>,
}

impl From<&Skill> for SkillResponse {
    fn from(skill: &Skill) -> Self {
        Self {
            id: skill.id().to_string(),
            name: skill.name().to_string(),
            votes: skill.votes(),
            tags: skill.tags().iter().map(|t| t.as_str().to_string()).collect(),
        }
    }
}

/// Confirmation returned by DELETE /sets/{id}.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteSetResponse {
    pub set_id: String,
    pub message: String,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            code: "CONFLICT".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{SetId, UserId};
    use crate::domain::set::Tag;

    #[test]
    fn create_set_request_deserializes() {
        let json = r#"{"name": "Team Alpha"}"#;
        let req: CreateSetRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.name, "Team Alpha");
    }

    #[test]
    fn add_skill_request_without_votes_deserializes_to_none() {
        let json = r#"{"name": "Go"}"#;
        let req: AddSkillRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.name, "Go");
        assert!(req.votes.is_none());
    }

    #[test]
    fn add_skill_request_with_votes_deserializes() {
        let json = r#"{"name": "Go", "votes": 3}"#;
        let req: AddSkillRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.votes, Some(3));
    }

    #[test]
    fn set_votes_request_keeps_negative_values_for_handler_validation() {
        let json = r#"{"votes": -2}"#;
        let req: SetVotesRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.votes, Some(-2));
    }

    #[test]
    fn set_response_conversion_includes_skills() {
        let mut set = CustomSet::new(SetId::new(), UserId::new("alice").unwrap(), "Team").unwrap();
        let go = set.add_skill("Go", 2).unwrap();
        set.add_skill_tag(&go, Tag::new("Back-End!").unwrap()).unwrap();

        let response: SetResponse = set.into();
        assert_eq!(response.name, "Team");
        assert_eq!(response.owner_id, "alice");
        assert_eq!(response.skills.len(), 1);
        assert_eq!(response.skills[0].name, "Go");
        assert_eq!(response.skills[0].votes, 2);
        assert_eq!(response.skills[0].tags, vec!["backend"]);
    }

    #[test]
    fn set_response_serializes_timestamps_as_rfc3339() {
        let set = CustomSet::new(SetId::new(), UserId::new("alice").unwrap(), "Team").unwrap();
        let response: SetResponse = set.into();
        let json = serde_json::to_value(&response).unwrap();

        assert!(json["created_at"].as_str().unwrap().contains('T'));
    }

    #[test]
    fn error_response_bad_request_creates_correctly() {
        let error = ErrorResponse::bad_request("Invalid input");
        assert_eq!(error.code, "BAD_REQUEST");
        assert_eq!(error.message, "Invalid input");
    }

    #[test]
    fn error_response_not_found_creates_correctly() {
        let error = ErrorResponse::not_found("Set", "abc-123");
        assert_eq!(error.code, "NOT_FOUND");
        assert!(error.message.contains("Set"));
        assert!(error.message.contains("abc-123"));
    }

    #[test]
    fn error_response_conflict_creates_correctly() {
        let error = ErrorResponse::conflict("A set named 'Team' already exists");
        assert_eq!(error.code, "CONFLICT");
    }
}
