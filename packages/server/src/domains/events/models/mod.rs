pub mod event;
pub mod event_status;

pub use event::Event;
pub use event_status::{EventStatus, EventStatusSymbol};
