use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::OrganizerId;

/// Organizer - a user who owns and may mutate events.
///
/// Registration and profile management live in a separate service; this
/// model carries just what the admin API needs for ownership scoping.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Organizer {
    pub id: OrganizerId,
    pub email: String,
    pub fullname: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Organizer {
    /// Find organizer by ID
    pub async fn find_by_id(id: OrganizerId, pool: &PgPool) -> Result<Option<Self>> {
        let organizer = sqlx::query_as::<_, Organizer>("SELECT * FROM organizers WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(organizer)
    }

    /// Create a new organizer (returns inserted record with defaults applied)
    pub async fn create(email: String, fullname: String, pool: &PgPool) -> Result<Self> {
        let organizer = sqlx::query_as::<_, Organizer>(
            r#"
            INSERT INTO organizers (email, fullname)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(email)
        .bind(fullname)
        .fetch_one(pool)
        .await?;

        Ok(organizer)
    }
}
