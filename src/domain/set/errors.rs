//! Set-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, SetId, SkillId};

/// Errors raised by set aggregate operations.
///
/// "Not found" deliberately covers both a missing resource and a resource
/// owned by someone else, so callers cannot probe for other users' data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetError {
    /// Set was not found (or is not owned by the caller).
    NotFound(SetId),
    /// Skill was not found within the set.
    SkillNotFound(SkillId),
    /// Tag is not present on the skill.
    TagNotFound(String),
    /// Uniqueness violation (set name, skill name, or tag).
    Conflict(String),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl SetError {
    pub fn not_found(id: SetId) -> Self {
        SetError::NotFound(id)
    }
    pub fn skill_not_found(id: SkillId) -> Self {
        SetError::SkillNotFound(id)
    }
    pub fn tag_not_found(tag: impl Into<String>) -> Self {
        SetError::TagNotFound(tag.into())
    }
    pub fn conflict(message: impl Into<String>) -> Self {
        SetError::Conflict(message.into())
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        SetError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        SetError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            SetError::NotFound(_) => ErrorCode::SetNotFound,
            SetError::SkillNotFound(_) => ErrorCode::SkillNotFound,
            SetError::TagNotFound(_) => ErrorCode::TagNotFound,
            SetError::Conflict(_) => ErrorCode::Conflict,
            SetError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            SetError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            SetError::NotFound(id) => format!("Set not found: {}", id),
            SetError::SkillNotFound(id) => format!("Skill not found: {}", id),
            SetError::TagNotFound(tag) => format!("Tag not found: {}", tag),
            SetError::Conflict(msg) => msg.clone(),
            SetError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            SetError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for SetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SetError {}

impl From<DomainError> for SetError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed | ErrorCode::EmptyField | ErrorCode::InvalidFormat => {
                SetError::ValidationFailed {
                    field: err
                        .details
                        .get("field")
                        .cloned()
                        .unwrap_or_else(|| "unknown".to_string()),
                    message: err.message,
                }
            }
            ErrorCode::Conflict => SetError::Conflict(err.message),
            _ => SetError::Infrastructure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_includes_id() {
        let id = SetId::new();
        let err = SetError::not_found(id);
        assert!(err.message().contains(&id.to_string()));
        assert_eq!(err.code(), ErrorCode::SetNotFound);
    }

    #[test]
    fn validation_error_formats_field() {
        let err = SetError::validation("name", "Name cannot be empty");
        assert_eq!(
            format!("{}", err),
            "Validation failed for 'name': Name cannot be empty"
        );
    }

    #[test]
    fn domain_validation_error_converts_with_field_detail() {
        let domain_err = DomainError::validation("votes", "votes is required");
        let err: SetError = domain_err.into();
        assert!(matches!(
            err,
            SetError::ValidationFailed { ref field, .. } if field == "votes"
        ));
    }

    #[test]
    fn domain_database_error_converts_to_infrastructure() {
        let domain_err = DomainError::new(ErrorCode::DatabaseError, "connection reset");
        let err: SetError = domain_err.into();
        assert!(matches!(err, SetError::Infrastructure(_)));
    }
}
