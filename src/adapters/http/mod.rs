//! HTTP adapters - REST API implementations.

pub mod middleware;
pub mod router;
pub mod set;

// Re-export key types for convenience
pub use middleware::{auth_middleware, AuthState, RequireAuth};
pub use router::api_router;
pub use set::SetHandlers;
