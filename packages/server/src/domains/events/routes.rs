//! Admin HTTP surface for the events domain.
//!
//! Form-encoded submissions in, redirects or field-error payloads out. Every
//! mutating handler runs the submission timer, so a response is never
//! produced before the minimum window has elapsed, success or failure alike.

use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Form, Json, Router};

use crate::common::utils::SubmissionTimer;
use crate::common::EventId;
use crate::domains::events::actions::{self, SubmissionOutcome};
use crate::domains::events::data::{
    ChangeEventStatusInput, EventDeleteInput, EventList, EventResource, EventUpdateInput,
    SubmissionRejection,
};
use crate::domains::events::error::EventError;
use crate::domains::events::models::EventStatus;
use crate::domains::events::schema::FieldErrors;
use crate::server::app::AppState;
use crate::server::middleware::AuthUser;

/// Build the axum router for the events admin surface.
pub fn router() -> Router {
    Router::new()
        .route("/admin/events", get(events_index_handler))
        .route("/admin/events/patch", post(patch_event_handler))
        .route("/admin/events/delete", post(delete_event_handler))
        .route(
            "/admin/events/:event_id",
            get(event_resource_handler).post(update_event_handler),
        )
}

/// The organizer's events, newest first.
async fn events_index_handler(
    Extension(state): Extension<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<EventList>, EventError> {
    let events = actions::list_events(auth.organizer_id, &state.db_pool).await?;
    Ok(Json(EventList { events }))
}

/// Edit page data: the event plus the available statuses, passed
/// explicitly so the client never reads them from ambient state.
async fn event_resource_handler(
    Extension(state): Extension<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(event_id): Path<String>,
) -> Result<Json<EventResource>, EventError> {
    let event_id = EventId::parse(&event_id).map_err(|_| EventError::NotFound)?;

    let event = actions::get_event(event_id, auth.organizer_id, &state.db_pool).await?;
    let event_statuses = EventStatus::find_all(&state.db_pool).await?;

    Ok(Json(EventResource {
        event,
        event_statuses,
    }))
}

/// Update submission. Redirects to the event's canonical admin location on
/// success; returns the field errors for re-display on rejection.
async fn update_event_handler(
    Extension(state): Extension<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(_event_id): Path<String>,
    Form(input): Form<EventUpdateInput>,
) -> Result<Response, EventError> {
    let timer = SubmissionTimer::start(state.form_min_delay);
    let result = actions::update_event(input, auth.organizer_id, &state.db_pool).await;
    timer.delay().await;

    match result? {
        SubmissionOutcome::Accepted(event) => {
            Ok(Redirect::to(&format!("/admin/events/{}", event.id)).into_response())
        }
        SubmissionOutcome::Rejected(errors) => Ok(rejected(errors)),
    }
}

/// Status-change submission (`intent = "change-event-status"`).
async fn patch_event_handler(
    Extension(state): Extension<AppState>,
    Extension(auth): Extension<AuthUser>,
    Form(input): Form<ChangeEventStatusInput>,
) -> Result<Response, EventError> {
    let timer = SubmissionTimer::start(state.form_min_delay);
    let result = actions::change_event_status(input, auth.organizer_id, &state.db_pool).await;
    timer.delay().await;

    match result? {
        SubmissionOutcome::Accepted(event) => {
            Ok(Redirect::to(&format!("/admin/events/{}", event.id)).into_response())
        }
        SubmissionOutcome::Rejected(errors) => Ok(rejected(errors)),
    }
}

/// Delete submission, dispatched by intent.
async fn delete_event_handler(
    Extension(state): Extension<AppState>,
    Extension(auth): Extension<AuthUser>,
    Form(input): Form<EventDeleteInput>,
) -> Result<Response, EventError> {
    let timer = SubmissionTimer::start(state.form_min_delay);
    let result = actions::delete_events(input, auth.organizer_id, &state.db_pool).await;
    timer.delay().await;

    match result? {
        SubmissionOutcome::Accepted(_removed) => Ok(Redirect::to("/admin/events").into_response()),
        SubmissionOutcome::Rejected(errors) => Ok(rejected(errors)),
    }
}

fn rejected(errors: FieldErrors) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(SubmissionRejection::new(errors)),
    )
        .into_response()
}
