use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{EventId, OrganizerId};
use crate::domains::events::data::EventUpdatePayload;
use crate::domains::events::error::EventError;

/// Event - a publishable post owned by an organizer.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Event {
    pub id: EventId,
    pub organizer_id: OrganizerId,

    // Content
    pub slug: String,
    pub title: String,
    pub description: String,
    pub content: Option<String>,
    pub reading_time: Option<i32>,

    // Lifecycle
    pub status_symbol: String, // 'DRAFT', 'UNLISTED', 'PUBLISHED', 'ARCHIVED'

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// True once the event has been edited after creation.
    pub fn is_edited(&self) -> bool {
        self.created_at != self.updated_at
    }
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl Event {
    /// Find event by ID, scoped to its owning organizer.
    ///
    /// Ownership is part of the WHERE clause, so an organizer can never
    /// read another organizer's event even with a known id.
    pub async fn find_by_id(
        id: EventId,
        organizer_id: OrganizerId,
        pool: &PgPool,
    ) -> Result<Option<Self>, EventError> {
        let event = sqlx::query_as::<_, Event>(
            "SELECT * FROM events WHERE id = $1 AND organizer_id = $2",
        )
        .bind(id)
        .bind(organizer_id)
        .fetch_optional(pool)
        .await?;
        Ok(event)
    }

    /// Find the id of another event already using this slug, if any.
    ///
    /// Excludes the event being updated so resubmitting its own slug passes.
    pub async fn find_slug_conflict(
        slug: &str,
        exclude_id: EventId,
        pool: &PgPool,
    ) -> Result<Option<EventId>, EventError> {
        let conflict = sqlx::query_scalar::<_, EventId>(
            "SELECT id FROM events WHERE slug = $1 AND id <> $2 LIMIT 1",
        )
        .bind(slug)
        .bind(exclude_id)
        .fetch_optional(pool)
        .await?;
        Ok(conflict)
    }

    /// Find an organizer's events, newest first (admin index page).
    pub async fn find_all_for_organizer(
        organizer_id: OrganizerId,
        pool: &PgPool,
    ) -> Result<Vec<Self>, EventError> {
        let events = sqlx::query_as::<_, Event>(
            "SELECT * FROM events
             WHERE organizer_id = $1
             ORDER BY created_at DESC",
        )
        .bind(organizer_id)
        .fetch_all(pool)
        .await?;
        Ok(events)
    }

    /// Create a new event (returns inserted record with defaults applied)
    pub async fn create(
        organizer_id: OrganizerId,
        slug: String,
        title: String,
        description: String,
        content: Option<String>,
        reading_time: Option<i32>,
        status_symbol: String,
        pool: &PgPool,
    ) -> Result<Self, EventError> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (
                organizer_id,
                slug,
                title,
                description,
                content,
                reading_time,
                status_symbol
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(organizer_id)
        .bind(slug)
        .bind(title)
        .bind(description)
        .bind(content)
        .bind(reading_time)
        .bind(status_symbol)
        .fetch_one(pool)
        .await
        .map_err(map_slug_violation)?;

        Ok(event)
    }

    /// Update event content from a validated payload, scoped to the
    /// organizer. Returns `None` when no `(id, organizer_id)` row matches.
    ///
    /// The slug column's unique constraint backstops the pre-check read; a
    /// violation surfaces as `EventError::SlugTaken`, never as a raw
    /// database error.
    pub async fn update(
        payload: &EventUpdatePayload,
        organizer_id: OrganizerId,
        pool: &PgPool,
    ) -> Result<Option<Self>, EventError> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            UPDATE events
            SET
                slug = $3,
                title = $4,
                description = $5,
                content = $6,
                reading_time = $7,
                updated_at = NOW()
            WHERE id = $1 AND organizer_id = $2
            RETURNING *
            "#,
        )
        .bind(payload.id)
        .bind(organizer_id)
        .bind(&payload.slug)
        .bind(&payload.title)
        .bind(&payload.description)
        .bind(&payload.content)
        .bind(payload.reading_time)
        .fetch_optional(pool)
        .await
        .map_err(map_slug_violation)?;

        Ok(event)
    }

    /// Update event lifecycle status, scoped to the organizer.
    pub async fn update_status(
        id: EventId,
        organizer_id: OrganizerId,
        status_symbol: &str,
        pool: &PgPool,
    ) -> Result<Option<Self>, EventError> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            UPDATE events
            SET status_symbol = $3, updated_at = NOW()
            WHERE id = $1 AND organizer_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(organizer_id)
        .bind(status_symbol)
        .fetch_optional(pool)
        .await?;
        Ok(event)
    }

    /// Delete one event, scoped to the organizer. Returns the deleted
    /// event's title, or `None` when nothing matched.
    pub async fn delete_by_id(
        id: EventId,
        organizer_id: OrganizerId,
        pool: &PgPool,
    ) -> Result<Option<String>, EventError> {
        let title = sqlx::query_scalar::<_, String>(
            "DELETE FROM events WHERE id = $1 AND organizer_id = $2 RETURNING title",
        )
        .bind(id)
        .bind(organizer_id)
        .fetch_optional(pool)
        .await?;
        Ok(title)
    }

    /// Delete all of one organizer's events. Returns how many were removed.
    pub async fn delete_all_for_organizer(
        organizer_id: OrganizerId,
        pool: &PgPool,
    ) -> Result<u64, EventError> {
        let result = sqlx::query("DELETE FROM events WHERE organizer_id = $1")
            .bind(organizer_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}

/// Translate a slug unique-violation into its domain error; everything else
/// stays an infrastructure failure.
fn map_slug_violation(err: sqlx::Error) -> EventError {
    if let sqlx::Error::Database(db) = &err {
        if db.is_unique_violation() {
            return EventError::SlugTaken;
        }
    }
    EventError::Database(err)
}
