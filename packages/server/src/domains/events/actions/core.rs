//! Event CRUD actions - entry-point functions for event operations
//!
//! These are called directly from the admin route handlers. Actions are
//! self-contained: they take raw form input, run validation, enforce
//! organizer scoping, and return final models.

use sqlx::PgPool;
use tracing::{info, warn};

use crate::common::utils::truncate_text;
use crate::common::{EventId, OrganizerId};
use crate::domains::events::data::{ChangeEventStatusInput, EventDeleteInput, EventUpdateInput};
use crate::domains::events::error::EventError;
use crate::domains::events::models::{Event, EventStatus};
use crate::domains::events::schema::{self, FieldErrors};

/// Outcome of a validated form submission: accepted with its result, or
/// rejected with field errors for client re-display. Rejection is never a
/// process failure; infrastructure errors travel on the `Err` channel.
#[derive(Debug)]
pub enum SubmissionOutcome<T> {
    Accepted(T),
    Rejected(FieldErrors),
}

/// Update an event from raw form input, scoped to the acting organizer.
///
/// Validation fully precedes persistence: structural checks first, then the
/// slug-uniqueness read, then exactly one write. The slug column's unique
/// constraint backstops the read if a concurrent submission wins the race
/// between check and write.
pub async fn update_event(
    input: EventUpdateInput,
    organizer_id: OrganizerId,
    pool: &PgPool,
) -> Result<SubmissionOutcome<Event>, EventError> {
    let payload = match schema::validate_event_update(&input) {
        Ok(payload) => payload,
        Err(errors) => return Ok(SubmissionOutcome::Rejected(errors)),
    };

    // The session identity wins over the hidden form field
    if payload.organizer_id != organizer_id {
        warn!(
            form_organizer = %payload.organizer_id,
            organizer_id = %organizer_id,
            "Form organizer does not match session organizer"
        );
    }

    info!(event_id = %payload.id, slug = %payload.slug, "Updating event");

    if Event::find_slug_conflict(&payload.slug, payload.id, pool)
        .await?
        .is_some()
    {
        return Ok(SubmissionOutcome::Rejected(FieldErrors::slug_taken()));
    }

    match Event::update(&payload, organizer_id, pool).await {
        Ok(Some(event)) => Ok(SubmissionOutcome::Accepted(event)),
        Ok(None) => Err(EventError::NotFound),
        Err(EventError::SlugTaken) => Ok(SubmissionOutcome::Rejected(FieldErrors::slug_taken())),
        Err(other) => Err(other),
    }
}

/// Fetch one event scoped to its organizer (edit page data).
pub async fn get_event(
    event_id: EventId,
    organizer_id: OrganizerId,
    pool: &PgPool,
) -> Result<Event, EventError> {
    Event::find_by_id(event_id, organizer_id, pool)
        .await?
        .ok_or(EventError::NotFound)
}

/// List the organizer's events, newest first (index page data).
pub async fn list_events(
    organizer_id: OrganizerId,
    pool: &PgPool,
) -> Result<Vec<Event>, EventError> {
    Event::find_all_for_organizer(organizer_id, pool).await
}

/// Change an event's lifecycle status, scoped to the acting organizer.
///
/// The target symbol must exist in the status lookup table; an unknown
/// symbol is a field error, not a constraint violation.
pub async fn change_event_status(
    input: ChangeEventStatusInput,
    organizer_id: OrganizerId,
    pool: &PgPool,
) -> Result<SubmissionOutcome<Event>, EventError> {
    let (event_id, symbol) = match schema::validate_change_status(&input) {
        Ok(validated) => validated,
        Err(errors) => return Ok(SubmissionOutcome::Rejected(errors)),
    };

    if EventStatus::find_by_symbol(&symbol, pool).await?.is_none() {
        let mut errors = FieldErrors::new();
        errors.push("status_symbol", "Status is unknown");
        return Ok(SubmissionOutcome::Rejected(errors));
    }

    info!(event_id = %event_id, status = %symbol, "Changing event status");

    match Event::update_status(event_id, organizer_id, &symbol, pool).await? {
        Some(event) => Ok(SubmissionOutcome::Accepted(event)),
        None => Err(EventError::NotFound),
    }
}

/// Delete one event or all of the organizer's events, by intent.
///
/// Returns how many events were removed.
pub async fn delete_events(
    input: EventDeleteInput,
    organizer_id: OrganizerId,
    pool: &PgPool,
) -> Result<SubmissionOutcome<u64>, EventError> {
    match input.intent.as_deref() {
        Some("user-delete-event-by-id") => {
            let (form_organizer, event_id) = match schema::validate_delete_by_id(&input) {
                Ok(validated) => validated,
                Err(errors) => return Ok(SubmissionOutcome::Rejected(errors)),
            };

            if form_organizer != organizer_id {
                warn!(
                    form_organizer = %form_organizer,
                    organizer_id = %organizer_id,
                    "Form organizer does not match session organizer"
                );
            }

            match Event::delete_by_id(event_id, organizer_id, pool).await? {
                Some(title) => {
                    info!(event_id = %event_id, title = %truncate_text(&title, 32), "Deleted event");
                    Ok(SubmissionOutcome::Accepted(1))
                }
                None => Err(EventError::NotFound),
            }
        }
        Some("user-delete-all-events") => {
            if let Err(errors) = schema::validate_delete_all(&input) {
                return Ok(SubmissionOutcome::Rejected(errors));
            }

            let removed = Event::delete_all_for_organizer(organizer_id, pool).await?;
            info!(organizer_id = %organizer_id, count = removed, "Deleted all events");
            Ok(SubmissionOutcome::Accepted(removed))
        }
        _ => {
            let mut errors = FieldErrors::new();
            errors.push("intent", "Unknown intent");
            Ok(SubmissionOutcome::Rejected(errors))
        }
    }
}
