//! Form schema for event submissions.
//!
//! Structural validation only: everything checkable without touching the
//! store. The slug-uniqueness read happens in the actions layer after the
//! structural pass succeeds, so a structurally invalid submission never
//! reaches the database.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::common::{EventId, OrganizerId};

use super::data::{ChangeEventStatusInput, EventDeleteInput, EventUpdateInput, EventUpdatePayload};

pub const SLUG_MAX_CHARS: usize = 100;
pub const READING_TIME_MIN: i32 = 0;
pub const READING_TIME_MAX: i32 = 1000;

pub const SLUG_TAKEN_MESSAGE: &str = "Slug cannot be used, please change";

/// Field-scoped validation messages, keyed by form field name.
///
/// Messages for one field keep the order in which the checks fired.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// The canonical slug-conflict rejection.
    pub fn slug_taken() -> Self {
        let mut errors = Self::new();
        errors.push("slug", SLUG_TAKEN_MESSAGE);
        errors
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn messages(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Validate a raw update submission into a typed payload.
///
/// All structural checks run before returning, so the client sees every
/// field error at once rather than one per round-trip.
pub fn validate_event_update(input: &EventUpdateInput) -> Result<EventUpdatePayload, FieldErrors> {
    let mut errors = FieldErrors::new();

    let organizer_id = parse_organizer_id(input.organizer_id.as_deref(), &mut errors);
    let id = parse_event_id(input.id.as_deref(), &mut errors);

    let slug = match input.slug.as_deref() {
        None => {
            errors.push("slug", "Slug is required");
            None
        }
        Some(slug) => {
            let chars = slug.chars().count();
            if chars < 1 {
                errors.push("slug", "Slug require at least 1 character");
                None
            } else if chars > SLUG_MAX_CHARS {
                errors.push("slug", "Slug limited to 100 characters");
                None
            } else {
                Some(slug.to_string())
            }
        }
    };

    let title = match present(input.title.as_deref()) {
        Some(title) => Some(title.to_string()),
        None => {
            errors.push("title", "Title is required");
            None
        }
    };

    let description = match present(input.description.as_deref()) {
        Some(description) => Some(description.to_string()),
        None => {
            errors.push("description", "Description is required");
            None
        }
    };

    // Optional; an empty input counts as absent, like an untouched form field
    let reading_time = match present(input.reading_time.as_deref()) {
        None => None,
        Some(raw) => match raw.trim().parse::<i32>() {
            Err(_) => {
                errors.push("reading_time", "Reading time must be a number");
                None
            }
            Ok(n) if !(READING_TIME_MIN..=READING_TIME_MAX).contains(&n) => {
                errors.push("reading_time", "Reading time must be between 0 and 1000");
                None
            }
            Ok(n) => Some(n),
        },
    };

    match (organizer_id, id, slug, title, description) {
        (Some(organizer_id), Some(id), Some(slug), Some(title), Some(description))
            if errors.is_empty() =>
        {
            Ok(EventUpdatePayload {
                organizer_id,
                id,
                slug,
                title,
                description,
                content: input.content.clone(),
                reading_time,
            })
        }
        _ => Err(errors),
    }
}

/// Validate a status-change submission into `(event_id, status_symbol)`.
pub fn validate_change_status(
    input: &ChangeEventStatusInput,
) -> Result<(EventId, String), FieldErrors> {
    let mut errors = FieldErrors::new();

    if input.intent.as_deref() != Some("change-event-status") {
        errors.push("intent", "Unknown intent");
    }

    let event_id = parse_event_id(input.event_id.as_deref(), &mut errors);

    let status_symbol = match present(input.status_symbol.as_deref()) {
        Some(symbol) => Some(symbol.to_string()),
        None => {
            errors.push("status_symbol", "Status is required");
            None
        }
    };

    match (event_id, status_symbol) {
        (Some(event_id), Some(status_symbol)) if errors.is_empty() => Ok((event_id, status_symbol)),
        _ => Err(errors),
    }
}

/// Validate a delete-by-id submission into `(organizer_id, event_id)`.
pub fn validate_delete_by_id(
    input: &EventDeleteInput,
) -> Result<(OrganizerId, EventId), FieldErrors> {
    let mut errors = FieldErrors::new();

    let organizer_id = parse_organizer_id(input.organizer_id.as_deref(), &mut errors);
    let id = parse_event_id(input.id.as_deref(), &mut errors);

    match (organizer_id, id) {
        (Some(organizer_id), Some(id)) if errors.is_empty() => Ok((organizer_id, id)),
        _ => Err(errors),
    }
}

/// Validate a delete-all submission into the owning organizer id.
pub fn validate_delete_all(input: &EventDeleteInput) -> Result<OrganizerId, FieldErrors> {
    let mut errors = FieldErrors::new();

    match parse_organizer_id(input.organizer_id.as_deref(), &mut errors) {
        Some(organizer_id) if errors.is_empty() => Ok(organizer_id),
        _ => Err(errors),
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn parse_organizer_id(raw: Option<&str>, errors: &mut FieldErrors) -> Option<OrganizerId> {
    match present(raw) {
        None => {
            errors.push("organizer_id", "Organizer ID is required");
            None
        }
        Some(raw) => match OrganizerId::parse(raw) {
            Ok(id) => Some(id),
            Err(_) => {
                errors.push("organizer_id", "Organizer ID is invalid");
                None
            }
        },
    }
}

fn parse_event_id(raw: Option<&str>, errors: &mut FieldErrors) -> Option<EventId> {
    match present(raw) {
        None => {
            errors.push("id", "Event ID is required");
            None
        }
        Some(raw) => match EventId::parse(raw) {
            Ok(id) => Some(id),
            Err(_) => {
                errors.push("id", "Event ID is invalid");
                None
            }
        },
    }
}
