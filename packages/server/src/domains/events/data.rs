//! Form payloads and response shapes for the events admin surface.

use serde::{Deserialize, Serialize};

use crate::common::{EventId, OrganizerId};

use super::models::{Event, EventStatus};
use super::schema::FieldErrors;

/// Raw update submission as posted by the edit form.
///
/// Every field arrives as a string (or not at all); the schema module turns
/// this into a typed payload or field-scoped errors.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventUpdateInput {
    pub organizer_id: Option<String>,
    pub id: Option<String>,
    pub slug: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub reading_time: Option<String>,
}

/// Fully-typed update payload, produced only by successful validation.
#[derive(Debug, Clone)]
pub struct EventUpdatePayload {
    pub organizer_id: OrganizerId,
    pub id: EventId,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub content: Option<String>,
    pub reading_time: Option<i32>,
}

/// Status-change submission (`intent = "change-event-status"`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChangeEventStatusInput {
    pub intent: Option<String>,
    pub event_id: Option<String>,
    pub status_symbol: Option<String>,
}

/// Delete submission. `intent` selects delete-by-id (organizer_id + id)
/// or delete-all (organizer_id only).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventDeleteInput {
    pub intent: Option<String>,
    pub organizer_id: Option<String>,
    pub id: Option<String>,
}

/// Edit page data: the event plus the statuses the chooser can offer.
///
/// Statuses are carried explicitly in the payload rather than read from any
/// ambient request state by the client.
#[derive(Debug, Serialize)]
pub struct EventResource {
    pub event: Event,
    pub event_statuses: Vec<EventStatus>,
}

/// Admin index data: the organizer's events, newest first.
#[derive(Debug, Serialize)]
pub struct EventList {
    pub events: Vec<Event>,
}

/// Error payload returned to the client for form re-display.
#[derive(Debug, Serialize)]
pub struct SubmissionRejection {
    pub status: &'static str,
    pub errors: FieldErrors,
}

impl SubmissionRejection {
    pub fn new(errors: FieldErrors) -> Self {
        Self {
            status: "error",
            errors,
        }
    }
}
