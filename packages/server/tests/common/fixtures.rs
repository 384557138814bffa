//! Test fixtures for creating test data.
//!
//! These fixtures use the model methods directly to create test data.
//! Slugs and emails are suffixed with a fresh UUID because all tests share
//! one database.

use anyhow::Result;
use sqlx::PgPool;
use uuid::Uuid;

use server_core::common::OrganizerId;
use server_core::domains::events::models::{Event, EventStatusSymbol};
use server_core::domains::organizers::models::Organizer;

/// Create a test organizer with a unique email
pub async fn create_test_organizer(pool: &PgPool) -> Result<OrganizerId> {
    let organizer = Organizer::create(
        format!("organizer-{}@example.com", Uuid::new_v4()),
        "Test Organizer".to_string(),
        pool,
    )
    .await?;

    Ok(organizer.id)
}

/// Create a draft event with a unique slug
pub async fn create_test_event(
    pool: &PgPool,
    organizer_id: OrganizerId,
    title: &str,
) -> Result<Event> {
    let slug = format!("event-{}", Uuid::new_v4());
    create_test_event_with_slug(pool, organizer_id, title, &slug).await
}

/// Create a draft event with a specific slug
pub async fn create_test_event_with_slug(
    pool: &PgPool,
    organizer_id: OrganizerId,
    title: &str,
    slug: &str,
) -> Result<Event> {
    let event = Event::create(
        organizer_id,
        slug.to_string(),
        title.to_string(),
        "Test description".to_string(),
        None, // content
        None, // reading_time
        EventStatusSymbol::Draft.to_string(),
        pool,
    )
    .await?;

    Ok(event)
}
