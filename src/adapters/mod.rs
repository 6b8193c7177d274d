//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - Token verification (HS256 JWT, mock)
//! - `http` - axum REST API, middleware, and router assembly
//! - `memory` - In-memory store for tests and local development
//! - `postgres` - PostgreSQL-backed persistence

pub mod auth;
pub mod http;
pub mod memory;
pub mod postgres;
