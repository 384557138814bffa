pub mod actions;
pub mod data;
pub mod draft;
pub mod error;
pub mod models;
pub mod routes;
pub mod schema;

// Re-export data types (form payloads and responses)
pub use data::{
    ChangeEventStatusInput, EventDeleteInput, EventList, EventResource, EventUpdateInput,
    EventUpdatePayload, SubmissionRejection,
};

// Re-export domain models
pub use models::event::Event;
pub use models::event_status::{EventStatus, EventStatusSymbol};

pub use draft::EventDraft;
pub use error::EventError;
pub use schema::FieldErrors;
