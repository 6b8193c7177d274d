//! JWT adapter for bearer-token verification.
//!
//! Implements the `TokenVerifier` port with local HS256 validation
//! against a shared signing secret. The `sub` claim carries the stable
//! user identifier that scopes all reads and writes.

use async_trait::async_trait;
use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::TokenVerifier;

/// Claims we read from a validated token. Expiry is enforced by the
/// decoder itself and does not need to be carried here.
#[derive(Debug, Deserialize)]
struct Claims {
    sub: String,
}

/// HS256 JWT implementation of `TokenVerifier`.
pub struct JwtTokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtTokenVerifier {
    /// Creates a verifier from the shared signing secret.
    pub fn new(secret: &SecretString) -> Self {
        let decoding_key = DecodingKey::from_secret(secret.expose_secret().as_bytes());
        let validation = Validation::new(Algorithm::HS256);

        Self {
            decoding_key,
            validation,
        }
    }
}

#[async_trait]
impl TokenVerifier for JwtTokenVerifier {
    async fn verify(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken,
            }
        })?;

        let id = UserId::new(data.claims.sub).map_err(|_| AuthError::InvalidToken)?;
        Ok(AuthenticatedUser::new(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde::Serialize;

    #[derive(Serialize)]
    struct TestClaims {
        sub: String,
        exp: i64,
    }

    fn secret() -> SecretString {
        SecretString::new("a-test-secret-that-is-long-enough".to_string())
    }

    fn sign(claims: &TestClaims, key: &str) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(key.as_bytes()),
        )
        .unwrap()
    }

    fn future_exp() -> i64 {
        chrono::Utc::now().timestamp() + 3600
    }

    #[tokio::test]
    async fn verify_accepts_valid_token() {
        let verifier = JwtTokenVerifier::new(&secret());
        let token = sign(
            &TestClaims {
                sub: "user-123".to_string(),
                exp: future_exp(),
            },
            "a-test-secret-that-is-long-enough",
        );

        let user = verifier.verify(&token).await.unwrap();
        assert_eq!(user.id.as_str(), "user-123");
    }

    #[tokio::test]
    async fn verify_rejects_wrong_signature() {
        let verifier = JwtTokenVerifier::new(&secret());
        let token = sign(
            &TestClaims {
                sub: "user-123".to_string(),
                exp: future_exp(),
            },
            "a-different-secret-entirely-here",
        );

        let result = verifier.verify(&token).await;
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[tokio::test]
    async fn verify_rejects_expired_token() {
        let verifier = JwtTokenVerifier::new(&secret());
        let token = sign(
            &TestClaims {
                sub: "user-123".to_string(),
                exp: chrono::Utc::now().timestamp() - 3600,
            },
            "a-test-secret-that-is-long-enough",
        );

        let result = verifier.verify(&token).await;
        assert!(matches!(result, Err(AuthError::TokenExpired)));
    }

    #[tokio::test]
    async fn verify_rejects_garbage() {
        let verifier = JwtTokenVerifier::new(&secret());

        let result = verifier.verify("not-a-jwt").await;
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[tokio::test]
    async fn verify_rejects_empty_subject() {
        let verifier = JwtTokenVerifier::new(&secret());
        let token = sign(
            &TestClaims {
                sub: String::new(),
                exp: future_exp(),
            },
            "a-test-secret-that-is-long-enough",
        );

        let result = verifier.verify(&token).await;
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }
}
