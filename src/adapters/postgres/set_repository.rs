//! PostgreSQL implementation of SetRepository.
//!
//! Each CustomSet is persisted as one document row: scalar columns for
//! identity and name, and the nested skill array as a JSONB column. All
//! statements filter on `(id, owner_id)` in a single predicate, so an
//! unowned set is indistinguishable from a missing one.

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, SetId, Timestamp, UserId};
use crate::domain::set::{CustomSet, Skill};
use crate::ports::SetRepository;

/// PostgreSQL implementation of SetRepository.
#[derive(Clone)]
pub struct PostgresSetRepository {
    pool: PgPool,
}

impl PostgresSetRepository {
    /// Creates a new PostgresSetRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SetRepository for PostgresSetRepository {
    async fn insert(&self, set: &CustomSet) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO custom_sets (
                id, owner_id, name, skills, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(set.id().as_uuid())
        .bind(set.owner_id().as_str())
        .bind(set.name())
        .bind(Json(set.skills()))
        .bind(set.created_at().as_datetime())
        .bind(set.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert set: {}", e),
            )
        })?;

        Ok(())
    }

    async fn find(&self, owner_id: &UserId, id: &SetId) -> Result<Option<CustomSet>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, owner_id, name, skills, created_at, updated_at
            FROM custom_sets
            WHERE id = $1 AND owner_id = $2
            "#,
        )
        .bind(id.as_uuid())
        .bind(owner_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch set: {}", e),
            )
        })?;

        match row {
            Some(row) => Ok(Some(row_to_set(row)?)),
            None => Ok(None),
        }
    }

    async fn find_all(&self, owner_id: &UserId) -> Result<Vec<CustomSet>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, owner_id, name, skills, created_at, updated_at
            FROM custom_sets
            WHERE owner_id = $1
            "#,
        )
        .bind(owner_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch sets by owner: {}", e),
            )
        })?;

        rows.into_iter().map(row_to_set).collect()
    }

    async fn update(&self, set: &CustomSet) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE custom_sets SET
                name = $3,
                skills = $4,
                updated_at = $5
            WHERE id = $1 AND owner_id = $2
            "#,
        )
        .bind(set.id().as_uuid())
        .bind(set.owner_id().as_str())
        .bind(set.name())
        .bind(Json(set.skills()))
        .bind(set.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to update set: {}", e),
            )
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::SetNotFound,
                format!("Set not found: {}", set.id()),
            ));
        }

        Ok(())
    }

    async fn delete(&self, owner_id: &UserId, id: &SetId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM custom_sets WHERE id = $1 AND owner_id = $2")
            .bind(id.as_uuid())
            .bind(owner_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to delete set: {}", e),
                )
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::SetNotFound,
                format!("Set not found: {}", id),
            ));
        }

        Ok(())
    }

    async fn name_taken(&self, owner_id: &UserId, name: &str) -> Result<bool, DomainError> {
        let result: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM custom_sets WHERE owner_id = $1 AND lower(name) = $2",
        )
        .bind(owner_id.as_str())
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to check set name: {}", e),
            )
        })?;

        Ok(result.0 > 0)
    }

    async fn distinct_tags(&self, owner_id: &UserId) -> Result<Vec<String>, DomainError> {
        let tags: Vec<String> = sqlx::query_scalar(
            r#"
            SELECT DISTINCT tag
            FROM custom_sets,
                 jsonb_array_elements(skills) AS skill,
                 jsonb_array_elements_text(skill->'tags') AS tag
            WHERE owner_id = $1
            "#,
        )
        .bind(owner_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to aggregate tags: {}", e),
            )
        })?;

        Ok(tags)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn row_to_set(row: sqlx::postgres::PgRow) -> Result<CustomSet, DomainError> {
    let id: uuid::Uuid = row.try_get("id").map_err(|e| {
        DomainError::new(ErrorCode::DatabaseError, format!("Failed to get id: {}", e))
    })?;

    let owner_id: String = row.try_get("owner_id").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get owner_id: {}", e),
        )
    })?;

    let name: String = row.try_get("name").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get name: {}", e),
        )
    })?;

    let skills: Json<Vec<Skill>> = row.try_get("skills").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get skills: {}", e),
        )
    })?;

    let created_at: chrono::DateTime<chrono::Utc> = row.try_get("created_at").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get created_at: {}", e),
        )
    })?;

    let updated_at: chrono::DateTime<chrono::Utc> = row.try_get("updated_at").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get updated_at: {}", e),
        )
    })?;

    Ok(CustomSet::reconstitute(
        SetId::from_uuid(id),
        UserId::new(owner_id).map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid owner_id: {}", e),
            )
        })?,
        name,
        skills.0,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}
