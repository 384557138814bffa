//! Integration tests for the event update flow.
//!
//! Covers the full submission pipeline: structural validation, the slug
//! uniqueness check, organizer-scoped persistence, and the unique-constraint
//! backstop behind the pre-check read.

mod common;

use crate::common::{create_test_event, create_test_event_with_slug, create_test_organizer, TestHarness};
use server_core::common::EventId;
use server_core::domains::events::actions::{self, SubmissionOutcome};
use server_core::domains::events::data::EventUpdatePayload;
use server_core::domains::events::draft::EventDraft;
use server_core::domains::events::error::EventError;
use server_core::domains::events::models::Event;
use server_core::domains::events::schema::SLUG_TAKEN_MESSAGE;
use test_context::test_context;
use uuid::Uuid;

#[test_context(TestHarness)]
#[tokio::test]
async fn valid_submission_updates_exactly_one_event(ctx: &TestHarness) {
    let organizer_id = create_test_organizer(&ctx.db_pool).await.unwrap();
    let event = create_test_event(&ctx.db_pool, organizer_id, "Original title")
        .await
        .unwrap();
    let other = create_test_event(&ctx.db_pool, organizer_id, "Untouched title")
        .await
        .unwrap();

    let mut draft = EventDraft::from_event(&event);
    draft.set_title("Updated title");
    draft.set_description("Updated description");

    let outcome = actions::update_event(draft.build(), organizer_id, &ctx.db_pool)
        .await
        .unwrap();

    let updated = match outcome {
        SubmissionOutcome::Accepted(event) => event,
        SubmissionOutcome::Rejected(errors) => panic!("Unexpected rejection: {:?}", errors),
    };
    assert_eq!(updated.id, event.id);
    assert_eq!(updated.title, "Updated title");
    assert_eq!(updated.description, "Updated description");
    assert!(updated.is_edited());

    // The sibling event is untouched
    let reloaded = Event::find_by_id(other.id, organizer_id, &ctx.db_pool)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.title, "Untouched title");
    assert!(!reloaded.is_edited());
}

#[test_context(TestHarness)]
#[tokio::test]
async fn slug_unused_by_others_is_accepted(ctx: &TestHarness) {
    let organizer_id = create_test_organizer(&ctx.db_pool).await.unwrap();
    let event = create_test_event(&ctx.db_pool, organizer_id, "T")
        .await
        .unwrap();

    let fresh_slug = format!("my-event-{}", Uuid::new_v4());
    let mut draft = EventDraft::from_event(&event);
    draft.set_slug(&fresh_slug);

    let outcome = actions::update_event(draft.build(), organizer_id, &ctx.db_pool)
        .await
        .unwrap();

    match outcome {
        SubmissionOutcome::Accepted(updated) => assert_eq!(updated.slug, fresh_slug),
        SubmissionOutcome::Rejected(errors) => panic!("Unexpected rejection: {:?}", errors),
    }
}

#[test_context(TestHarness)]
#[tokio::test]
async fn slug_used_by_another_event_is_rejected_without_write(ctx: &TestHarness) {
    let organizer_id = create_test_organizer(&ctx.db_pool).await.unwrap();
    let event = create_test_event(&ctx.db_pool, organizer_id, "Mine")
        .await
        .unwrap();
    let other = create_test_event(&ctx.db_pool, organizer_id, "Other")
        .await
        .unwrap();

    let mut draft = EventDraft::from_event(&event);
    draft.set_slug(&other.slug);

    let outcome = actions::update_event(draft.build(), organizer_id, &ctx.db_pool)
        .await
        .unwrap();

    match outcome {
        SubmissionOutcome::Rejected(errors) => {
            assert_eq!(errors.messages("slug"), [SLUG_TAKEN_MESSAGE]);
        }
        SubmissionOutcome::Accepted(_) => panic!("Conflicting slug must be rejected"),
    }

    // No write happened
    let reloaded = Event::find_by_id(event.id, organizer_id, &ctx.db_pool)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.slug, event.slug);
    assert_eq!(reloaded.updated_at, event.updated_at);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn resubmitting_own_slug_passes_uniqueness(ctx: &TestHarness) {
    let organizer_id = create_test_organizer(&ctx.db_pool).await.unwrap();
    let event = create_test_event(&ctx.db_pool, organizer_id, "T")
        .await
        .unwrap();

    // Same slug, same event: the uniqueness check excludes self
    let outcome = actions::update_event(
        EventDraft::from_event(&event).build(),
        organizer_id,
        &ctx.db_pool,
    )
    .await
    .unwrap();

    assert!(matches!(outcome, SubmissionOutcome::Accepted(_)));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn structural_errors_are_rejected_before_any_write(ctx: &TestHarness) {
    let organizer_id = create_test_organizer(&ctx.db_pool).await.unwrap();
    let event = create_test_event(&ctx.db_pool, organizer_id, "Keep me")
        .await
        .unwrap();

    let mut draft = EventDraft::from_event(&event);
    draft.set_title("");

    let outcome = actions::update_event(draft.build(), organizer_id, &ctx.db_pool)
        .await
        .unwrap();

    match outcome {
        SubmissionOutcome::Rejected(errors) => {
            assert_eq!(errors.messages("title"), ["Title is required"]);
        }
        SubmissionOutcome::Accepted(_) => panic!("Empty title must be rejected"),
    }

    let reloaded = Event::find_by_id(event.id, organizer_id, &ctx.db_pool)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.title, "Keep me");
    assert_eq!(reloaded.updated_at, event.updated_at);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn reading_time_is_persisted(ctx: &TestHarness) {
    let organizer_id = create_test_organizer(&ctx.db_pool).await.unwrap();
    let event = create_test_event(&ctx.db_pool, organizer_id, "T")
        .await
        .unwrap();

    let mut draft = EventDraft::from_event(&event);
    draft.set_reading_time("12");

    let outcome = actions::update_event(draft.build(), organizer_id, &ctx.db_pool)
        .await
        .unwrap();

    match outcome {
        SubmissionOutcome::Accepted(updated) => assert_eq!(updated.reading_time, Some(12)),
        SubmissionOutcome::Rejected(errors) => panic!("Unexpected rejection: {:?}", errors),
    }
}

#[test_context(TestHarness)]
#[tokio::test]
async fn unknown_event_id_reports_not_found(ctx: &TestHarness) {
    let organizer_id = create_test_organizer(&ctx.db_pool).await.unwrap();
    let event = create_test_event(&ctx.db_pool, organizer_id, "T")
        .await
        .unwrap();

    let mut draft = EventDraft::from_event(&event);
    draft.set_slug(&format!("ghost-{}", Uuid::new_v4()));
    let mut input = draft.build();
    input.id = Some(EventId::new().to_string());

    let result = actions::update_event(input, organizer_id, &ctx.db_pool).await;
    assert!(matches!(result, Err(EventError::NotFound)));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn organizer_cannot_update_someone_elses_event(ctx: &TestHarness) {
    let owner_id = create_test_organizer(&ctx.db_pool).await.unwrap();
    let intruder_id = create_test_organizer(&ctx.db_pool).await.unwrap();
    let event = create_test_event(&ctx.db_pool, owner_id, "Private")
        .await
        .unwrap();

    let mut draft = EventDraft::from_event(&event);
    draft.set_title("Hijacked");

    // The session identity scopes the write, so the lookup misses
    let result = actions::update_event(draft.build(), intruder_id, &ctx.db_pool).await;
    assert!(matches!(result, Err(EventError::NotFound)));

    let reloaded = Event::find_by_id(event.id, owner_id, &ctx.db_pool)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.title, "Private");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn resubmitting_the_same_payload_is_idempotent(ctx: &TestHarness) {
    let organizer_id = create_test_organizer(&ctx.db_pool).await.unwrap();
    let event = create_test_event(&ctx.db_pool, organizer_id, "T")
        .await
        .unwrap();

    let mut draft = EventDraft::from_event(&event);
    draft.set_title("Settled title");
    draft.apply_editor_update("<p>Settled content</p>");
    let input = draft.build();

    let first = match actions::update_event(input.clone(), organizer_id, &ctx.db_pool)
        .await
        .unwrap()
    {
        SubmissionOutcome::Accepted(event) => event,
        SubmissionOutcome::Rejected(errors) => panic!("Unexpected rejection: {:?}", errors),
    };

    let second = match actions::update_event(input, organizer_id, &ctx.db_pool)
        .await
        .unwrap()
    {
        SubmissionOutcome::Accepted(event) => event,
        SubmissionOutcome::Rejected(errors) => panic!("Unexpected rejection: {:?}", errors),
    };

    assert_eq!(second.title, first.title);
    assert_eq!(second.slug, first.slug);
    assert_eq!(second.description, first.description);
    assert_eq!(second.content, first.content);
    assert_eq!(second.reading_time, first.reading_time);
    assert!(second.updated_at >= first.updated_at);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn unique_constraint_backstops_the_precheck(ctx: &TestHarness) {
    let organizer_id = create_test_organizer(&ctx.db_pool).await.unwrap();
    let taken_slug = format!("taken-{}", Uuid::new_v4());
    create_test_event_with_slug(&ctx.db_pool, organizer_id, "Holder", &taken_slug)
        .await
        .unwrap();
    let event = create_test_event(&ctx.db_pool, organizer_id, "Racer")
        .await
        .unwrap();

    // Write directly, as if a concurrent submission had passed the
    // pre-check before the holder committed
    let payload = EventUpdatePayload {
        organizer_id,
        id: event.id,
        slug: taken_slug,
        title: event.title.clone(),
        description: event.description.clone(),
        content: None,
        reading_time: None,
    };

    let result = Event::update(&payload, organizer_id, &ctx.db_pool).await;
    assert!(matches!(result, Err(EventError::SlugTaken)));
}
