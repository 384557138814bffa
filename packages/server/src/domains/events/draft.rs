//! Draft builder for the event edit form.
//!
//! The admin UI keeps a working copy of the form while the organizer edits.
//! External widgets feed their output in through explicit callbacks: the
//! rich-text editor pushes its HTML through `apply_editor_update`, and the
//! slug suggestion derives from the working title on request. `build`
//! produces the raw submission input exactly as the form would post it, so
//! widget output is always captured before structural validation runs.

use crate::common::utils::create_slug;

use super::data::EventUpdateInput;
use super::models::Event;

#[derive(Debug, Clone, Default)]
pub struct EventDraft {
    organizer_id: String,
    id: String,
    slug: String,
    title: String,
    description: String,
    content: Option<String>,
    reading_time: Option<String>,
}

impl EventDraft {
    /// Start a draft prefilled from the stored event (the form's defaults).
    pub fn from_event(event: &Event) -> Self {
        Self {
            organizer_id: event.organizer_id.to_string(),
            id: event.id.to_string(),
            slug: event.slug.clone(),
            title: event.title.clone(),
            description: event.description.clone(),
            content: event.content.clone(),
            reading_time: event.reading_time.map(|n| n.to_string()),
        }
    }

    pub fn set_slug(&mut self, slug: &str) {
        self.slug = slug.to_string();
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    pub fn set_description(&mut self, description: &str) {
        self.description = description.to_string();
    }

    pub fn set_reading_time(&mut self, raw: &str) {
        self.reading_time = Some(raw.to_string());
    }

    /// Replace the slug with one generated from the working title.
    pub fn generate_slug(&mut self) {
        self.slug = create_slug(&self.title);
    }

    /// Callback for the rich-text editor widget: captures its HTML output
    /// into the draft so it becomes part of the submission payload.
    pub fn apply_editor_update(&mut self, html: &str) {
        self.content = Some(html.to_string());
    }

    /// The submission input exactly as the form posts it.
    pub fn build(&self) -> EventUpdateInput {
        EventUpdateInput {
            organizer_id: Some(self.organizer_id.clone()),
            id: Some(self.id.clone()),
            slug: Some(self.slug.clone()),
            title: Some(self.title.clone()),
            description: Some(self.description.clone()),
            content: self.content.clone(),
            reading_time: self.reading_time.clone(),
        }
    }
}
