//! PostgreSQL adapters - database implementations for repository ports.

mod set_repository;

pub use set_repository::PostgresSetRepository;
