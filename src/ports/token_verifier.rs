//! Token verification port.
//!
//! This port defines the contract for validating bearer credentials and
//! extracting user identity. It is scheme-agnostic: the aggregate service
//! only ever sees "given a token, produce a verified user identifier or
//! fail".

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Validates bearer tokens and extracts user identity.
///
/// HTTP middleware uses this to turn `Authorization: Bearer …` headers
/// into an [`AuthenticatedUser`] before any business logic runs.
///
/// # Contract
///
/// Implementations must:
/// - Validate the token signature and expiry
/// - Return `AuthError::InvalidToken` for malformed/bad-signature tokens
/// - Return `AuthError::TokenExpired` for expired tokens
/// - Return `AuthError::ServiceUnavailable` for transient errors
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    /// Validate a bearer token (without the "Bearer " prefix).
    async fn verify(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}
